use super::*;

fn event() -> Event {
    serde_json::from_value(serde_json::json!({
        "eventId": 12,
        "title": "Party",
        "startDateTime": "2025-06-01T18:00:00",
        "endDateTime": "2025-06-01T23:30:00",
        "createdByUsername": "jane.doe42",
        "createdAt": "2025-05-01T10:00:00"
    }))
    .unwrap()
}

#[test]
fn schedule_label_formats_both_ends() {
    assert_eq!(schedule_label(&event()), "Jun 1, 2025, 6:00 PM - Jun 1, 2025, 11:30 PM");
}

#[test]
fn details_href_uses_event_id() {
    assert_eq!(details_href(&event()), "/events/12");
}

#[test]
fn event_card_owns_every_display_field() {
    let card = EventCard::from(event());
    assert_eq!(
        card,
        EventCard {
            event_id: 12,
            href: "/events/12".to_owned(),
            title: "Party".to_owned(),
            when: "Jun 1, 2025, 6:00 PM - Jun 1, 2025, 11:30 PM".to_owned(),
            location: String::new(),
        }
    );
}
