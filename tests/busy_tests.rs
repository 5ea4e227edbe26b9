use ghostlink_ui::busy::BusyState;
use leptos::prelude::*;

#[test]
fn test_enter_shows_overlay_and_disables_controls() {
    let overlay = RwSignal::new(false);
    let busy = BusyState::new(overlay);

    let guard = busy.enter();
    assert!(overlay.get_untracked());
    assert!(busy.disabled().get_untracked());
    drop(guard);
}

#[test]
fn test_guard_drop_restores_form() {
    let overlay = RwSignal::new(false);
    let busy = BusyState::new(overlay);

    {
        let _guard = busy.enter();
    }
    assert!(!overlay.get_untracked());
    assert!(!busy.disabled().get_untracked());
}

#[test]
fn test_enter_is_idempotent_on_overlay() {
    let overlay = RwSignal::new(true);
    let busy = BusyState::new(overlay);

    let guard = busy.enter();
    assert!(overlay.get_untracked());
    drop(guard);
    assert!(!overlay.get_untracked());
}

#[test]
fn test_overlay_is_last_write_wins_across_forms() {
    let overlay = RwSignal::new(false);
    let encode = BusyState::new(overlay);
    let decode = BusyState::new(overlay);

    let encode_guard = encode.enter();
    let decode_guard = decode.enter();
    assert!(overlay.get_untracked());

    // The decode form settling hides the overlay even though the encode
    // form is still in flight; its own controls stay disabled.
    drop(decode_guard);
    assert!(!overlay.get_untracked());
    assert!(encode.disabled().get_untracked());
    assert!(!decode.disabled().get_untracked());

    drop(encode_guard);
    assert!(!encode.disabled().get_untracked());
}

#[test]
fn test_forms_have_independent_disabled_flags() {
    let overlay = RwSignal::new(false);
    let encode = BusyState::new(overlay);
    let decode = BusyState::new(overlay);

    let _guard = encode.enter();
    assert!(encode.disabled().get_untracked());
    assert!(!decode.disabled().get_untracked());
}
