//! End-to-end flows through the page controller: modal, validation,
//! progress, and the scheduled submission cycle.

use portfolio_core::{
    Catalog, FormField, PageController, PortfolioConfig, SectionLayout, SubmitPhase, Validity,
};

fn page() -> PageController {
    PageController::with_seed(Catalog::builtin().unwrap(), &PortfolioConfig::default(), 9)
}

fn fill(page: &mut PageController) {
    page.update_field(FormField::Name, "Grace Hopper");
    page.update_field(FormField::Email, "grace@navy.mil");
    page.update_field(FormField::Subject, "mentorship");
    page.update_field(FormField::Message, "I would love to hear about COBOL.");
}

#[test]
fn every_catalog_record_renders() {
    let page = page();
    for record in page.catalog().records() {
        let template = portfolio_core::ModalTemplate::from_record(record);
        assert_eq!(template.sections.len(), 4);
        assert_eq!(template.sections[1].layout, SectionLayout::Tags);
        assert_eq!(template.sections[0].items, record.features);
        assert_eq!(template.sections[3].items, record.outcomes);
    }
}

#[test]
fn unknown_project_leaves_modal_closed() {
    let mut page = page();
    assert!(!page.open_project("missing"));
    assert!(!page.modal().is_open());

    page.open_project("learning-tracker");
    assert!(!page.open_project("missing"));
    assert_eq!(page.modal().project_id(), Some("learning-tracker"));
}

#[test]
fn close_triggers() {
    let mut page = page();

    page.open_project("portfolio");
    assert!(page.close_project());

    page.open_project("portfolio");
    assert!(!page.backdrop_click(true));
    assert!(page.backdrop_click(false));

    page.open_project("portfolio");
    assert!(page.handle_key("Escape"));
    assert!(!page.modal().is_open());
}

#[test]
fn progress_follows_fields() {
    let mut page = page();
    let expected = [25, 50, 75, 100];

    let inputs = [
        (FormField::Name, "Grace Hopper"),
        (FormField::Email, "grace@navy.mil"),
        (FormField::Subject, "question"),
        (FormField::Message, "Ten chars!"),
    ];
    for ((field, value), percent) in inputs.into_iter().zip(expected) {
        page.update_field(field, value);
        assert_eq!(page.form().progress_view().percent, percent);
    }

    let view = page.form().progress_view();
    assert!(view.encouragement_visible);
    assert_eq!(view.text, "Perfect! Ready to send! 🎉");

    page.update_field(FormField::Email, "grace@navy");
    let view = page.form().progress_view();
    assert_eq!(view.percent, 75);
    assert!(!view.encouragement_visible);
    assert_eq!(
        page.form().field(FormField::Email).validity,
        Validity::Invalid
    );
}

#[test]
fn double_submit_still_ends_clear_and_enabled() {
    let mut page = page();
    fill(&mut page);

    let first = page.submit(0).unwrap();
    assert_eq!(first.values.subject, "mentorship");
    assert!(page.form().phase().disabled());

    assert!(page.submit(2_000).is_none());

    let mut now = 0;
    while let Some(deadline) = page.next_deadline() {
        now = deadline;
        page.tick(now);
    }
    assert!(now >= 3_000);

    assert_eq!(page.form().phase(), SubmitPhase::Idle);
    assert!(!page.form().phase().disabled());
    for &field in FormField::all() {
        let state = page.form().field(field);
        assert_eq!(state.raw_value, "");
        assert!(!state.shows_message());
    }
    assert_eq!(page.form().progress_view().text, "Let's get started! 🚀");
    assert!(page.celebration().is_none());
}

#[test]
fn submit_again_after_reset() {
    let mut page = page();
    fill(&mut page);
    let first = page.submit(0).unwrap();
    page.tick(3_000);

    fill(&mut page);
    let second = page.submit(5_000).unwrap();
    assert!(second.generation > first.generation);
    assert_eq!(page.form().phase(), SubmitPhase::Sent);

    page.tick(7_999);
    assert_eq!(page.form().phase(), SubmitPhase::Sent);
    page.tick(8_000);
    assert_eq!(page.form().phase(), SubmitPhase::Idle);
}
