use super::*;
use crate::net::types::{ActivityCollection, ActivityDetails};

fn activity(participants: &[&str]) -> Activity {
    Activity {
        name: "Chess Club".to_owned(),
        details: ActivityDetails {
            description: "Strategy".to_owned(),
            schedule: "Mon 3pm".to_owned(),
            max_participants: 10,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        },
    }
}

#[test]
fn empty_roster_renders_placeholder() {
    assert_eq!(ParticipantsView::of(&activity(&[])), ParticipantsView::Empty);
}

#[test]
fn roster_renders_one_removal_target_per_participant() {
    let view = ParticipantsView::of(&activity(&["a@x.com", "b@x.com", "c@x.com"]));
    let ParticipantsView::Listed(targets) = view else {
        panic!("expected listed participants");
    };
    assert_eq!(targets.len(), 3);
    assert!(targets.iter().all(|t| t.activity == "Chess Club"));
    let emails: Vec<_> = targets.iter().map(|t| t.email.as_str()).collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com", "c@x.com"]);
}

#[test]
fn spots_left_label_matches_capacity_minus_roster() {
    assert_eq!(spots_left_label(&activity(&["a@x.com"])), "9 spots left");
    assert_eq!(spots_left_label(&activity(&[])), "10 spots left");
}

#[test]
fn chess_club_scenario_has_single_participant_row() {
    let json = r#"{"Chess Club": {"description":"...","schedule":"Mon 3pm","max_participants":10,"participants":["a@x.com"]}}"#;
    let collection: ActivityCollection = serde_json::from_str(json).unwrap();
    let chess = &collection.0[0];
    assert_eq!(spots_left_label(chess), "9 spots left");
    assert_eq!(
        ParticipantsView::of(chess),
        ParticipantsView::Listed(vec![RemovalTarget { activity: "Chess Club".to_owned(), email: "a@x.com".to_owned() }])
    );
}

#[test]
fn spots_left_never_negative_for_well_formed_rosters() {
    for max in 0..5_i64 {
        let emails: Vec<String> = (0..max).map(|i| format!("s{i}@x.com")).collect();
        for taken in 0..=emails.len() {
            let roster: Vec<&str> = emails[..taken].iter().map(String::as_str).collect();
            let mut a = activity(&roster);
            a.details.max_participants = max;
            assert!(a.spots_left() >= 0);
            assert_eq!(a.spots_left(), max - i64::try_from(taken).unwrap());
        }
    }
}

// =============================================================
// Server-rendered markup
// =============================================================

#[cfg(feature = "ssr")]
fn render_card(activity: Activity) -> String {
    use leptos::prelude::*;

    let owner = Owner::new();
    owner.with(|| {
        let on_remove = Callback::new(|_: RemovalTarget| {});
        view! { <ActivityCard activity=activity on_remove=on_remove/> }.to_html()
    })
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_card_tags_each_removal_control() {
    let html = render_card(activity(&["a@x.com", "b@x.com"]));
    assert!(html.contains("Chess Club"));
    assert!(html.contains("Mon 3pm"));
    assert!(html.contains("8 spots left"));
    assert!(html.contains(r#"class="participants-list""#));
    assert_eq!(html.matches(r#"class="participant-item""#).count(), 2);
    assert_eq!(html.matches(r#"class="delete-participant""#).count(), 2);
    assert_eq!(html.matches(r#"data-activity="Chess Club""#).count(), 2);
    assert!(html.contains(r#"data-email="a@x.com""#));
    assert!(html.contains(r#"data-email="b@x.com""#));
    assert!(!html.contains(NO_PARTICIPANTS_TEXT));
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_card_without_participants_shows_placeholder_only() {
    let html = render_card(activity(&[]));
    assert!(html.contains(r#"class="no-participants""#));
    assert!(html.contains(NO_PARTICIPANTS_TEXT));
    assert!(html.contains("10 spots left"));
    assert!(!html.contains("<li"));
    assert!(!html.contains("data-email"));
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_card_escapes_activity_text() {
    let mut a = activity(&[]);
    a.name = "<b>Chess</b>".to_owned();
    a.details.description = "Kings & <queens>".to_owned();
    let html = render_card(a);
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;Chess&lt;/b&gt;"));
    assert!(!html.contains("<queens>"));
}
