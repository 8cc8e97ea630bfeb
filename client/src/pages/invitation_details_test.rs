use super::*;

#[test]
fn status_labels_are_human_readable() {
    assert_eq!(status_label(RsvpStatus::Yes), "Attending");
    assert_eq!(status_label(RsvpStatus::NoResponse), "Not responded yet");
}

#[test]
fn current_choice_is_highlighted() {
    assert_eq!(choice_class(RsvpStatus::Maybe, RsvpStatus::Maybe), "btn btn--primary rsvp__choice");
    assert_eq!(choice_class(RsvpStatus::Maybe, RsvpStatus::Yes), "btn rsvp__choice");
    assert_eq!(choice_class(RsvpStatus::NoResponse, RsvpStatus::No), "btn rsvp__choice");
}
