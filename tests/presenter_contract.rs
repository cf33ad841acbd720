mod common;

use std::sync::Arc;

use common::{failure, records, ManualUserService, RecordingView, ViewCall};
use userscreen::model::FetchResult;
use userscreen::presenter::UserPresenter;

fn presenter_with_view() -> (
    UserPresenter<ManualUserService>,
    ManualUserService,
    Arc<RecordingView>,
) {
    let service = ManualUserService::new();
    let presenter = UserPresenter::new(service.clone());
    let view = RecordingView::new();
    presenter.attach_view(&view);
    (presenter, service, view)
}

#[test]
fn test_fetch_shows_loading_before_service_answers() {
    let (presenter, service, view) = presenter_with_view();

    presenter.fetch_data();

    assert_eq!(view.calls(), vec![ViewCall::ShowLoading]);
    assert_eq!(service.pending(), 1);
}

#[test]
fn test_success_round_trip_renders_records_in_order() {
    let (presenter, service, view) = presenter_with_view();
    let users = records(&["A", "B", "C"]);

    presenter.fetch_data();
    service.complete_next(FetchResult::Success(users.clone()));

    assert_eq!(
        view.calls(),
        vec![
            ViewCall::ShowLoading,
            ViewCall::HideLoading,
            ViewCall::PresentUsers(users),
        ]
    );
}

#[test]
fn test_non_empty_success_never_shows_empty_state() {
    let (presenter, service, view) = presenter_with_view();

    presenter.fetch_data();
    service.complete_next(FetchResult::Success(records(&["only"])));

    assert_eq!(view.count(|c| matches!(c, ViewCall::PresentUsers(_))), 1);
    assert_eq!(view.count(|c| matches!(c, ViewCall::ShowEmpty)), 0);
}

#[test]
fn test_empty_success_shows_empty_state() {
    let (presenter, service, view) = presenter_with_view();

    presenter.fetch_data();
    service.complete_next(FetchResult::Success(Vec::new()));

    assert_eq!(
        view.calls(),
        vec![
            ViewCall::ShowLoading,
            ViewCall::HideLoading,
            ViewCall::ShowEmpty
        ]
    );
}

#[test]
fn test_failure_shows_empty_state() {
    let (presenter, service, view) = presenter_with_view();

    presenter.fetch_data();
    service.complete_next(failure());

    assert_eq!(
        view.calls(),
        vec![
            ViewCall::ShowLoading,
            ViewCall::HideLoading,
            ViewCall::ShowEmpty
        ]
    );
    assert_eq!(view.count(|c| matches!(c, ViewCall::PresentUsers(_))), 0);
}

#[test]
fn test_fetch_without_view_still_calls_service() {
    let service = ManualUserService::new();
    let presenter = UserPresenter::new(service.clone());

    presenter.fetch_data();
    assert_eq!(service.pending(), 1);

    service.complete_next(FetchResult::Success(records(&["A"])));
    assert!(!presenter.has_view());
}

#[test]
fn test_view_attached_after_fetch_receives_completion_only() {
    let service = ManualUserService::new();
    let presenter = UserPresenter::new(service.clone());

    presenter.fetch_data();
    let view = RecordingView::new();
    presenter.attach_view(&view);
    service.complete_next(FetchResult::Success(Vec::new()));

    assert_eq!(view.calls(), vec![ViewCall::HideLoading, ViewCall::ShowEmpty]);
}

#[test]
fn test_reattaching_mid_flight_redirects_completion() {
    let (presenter, service, first) = presenter_with_view();

    presenter.fetch_data();
    let second = RecordingView::new();
    presenter.attach_view(&second);
    service.complete_next(FetchResult::Success(records(&["A", "B"])));

    assert_eq!(first.calls(), vec![ViewCall::ShowLoading]);
    assert_eq!(
        second.calls(),
        vec![
            ViewCall::HideLoading,
            ViewCall::PresentUsers(records(&["A", "B"]))
        ]
    );
}

#[test]
fn test_detaching_mid_flight_drops_completion() {
    let (presenter, service, view) = presenter_with_view();

    presenter.fetch_data();
    presenter.detach_view();
    service.complete_next(failure());

    assert_eq!(view.calls(), vec![ViewCall::ShowLoading]);
}

#[test]
fn test_dropped_view_is_not_called() {
    let service = ManualUserService::new();
    let presenter = UserPresenter::new(service.clone());
    {
        let view = RecordingView::new();
        presenter.attach_view(&view);
        presenter.fetch_data();
    }

    assert!(!presenter.has_view());
    service.complete_next(FetchResult::Success(records(&["A"])));
}

#[test]
fn test_overlapping_fetches_both_deliver_last_one_wins() {
    let (presenter, service, view) = presenter_with_view();

    presenter.fetch_data();
    presenter.fetch_data();
    assert_eq!(service.pending(), 2);

    // Second fetch answers first; the first one lands last and overwrites it.
    service.complete_last(FetchResult::Success(records(&["new"])));
    service.complete_next(FetchResult::Success(Vec::new()));

    assert_eq!(
        view.calls(),
        vec![
            ViewCall::ShowLoading,
            ViewCall::ShowLoading,
            ViewCall::HideLoading,
            ViewCall::PresentUsers(records(&["new"])),
            ViewCall::HideLoading,
            ViewCall::ShowEmpty,
        ]
    );
}

#[test]
fn test_presenter_is_reusable_across_cycles() {
    let (presenter, service, view) = presenter_with_view();

    presenter.fetch_data();
    service.complete_next(failure());
    presenter.fetch_data();
    service.complete_next(FetchResult::Success(records(&["A"])));

    let calls = view.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[3], ViewCall::ShowLoading);
    assert_eq!(calls[5], ViewCall::PresentUsers(records(&["A"])));
}
