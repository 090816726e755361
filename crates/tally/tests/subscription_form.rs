//! Integration tests for the subscription edit form.

use chrono::NaiveDate;
use tally::form::{FormHeader, format_currency, sanitize_amount};
use tally::prelude::*;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn form(platform: HostPlatform) -> SubscriptionForm {
    SubscriptionForm::new(
        platform,
        NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
        &PickerConfig::default(),
    )
}

#[test]
fn test_amount_helpers() {
    assert_eq!(sanitize_amount("1a2.3.4"), "12.34");
    assert_eq!(format_currency("50.5"), "$50.50");
    assert_eq!(format_currency("abc"), "$0.00");
}

#[test]
fn test_fill_in_whole_form() {
    setup();
    let mut form = form(HostPlatform::Android);

    form.open_app_list();
    form.app_list.set_search_query("SPOT");
    assert_eq!(form.app_list.visible_items().len(), 1);
    form.choose_app(0);

    form.open_amount_input();
    form.edit_amount("9.99");
    form.close_amount_input();

    form.open_category_list();
    form.choose_category(0);

    form.open_date_picker();
    form.date_picker.layout_complete();
    form.date_picker.handle_input(PresenterInput::wheel(
        DateField::Day,
        WheelGesture::MomentumEnd { offset: 0.0 },
    ));
    form.confirm_date();

    form.open_frequency_list();
    form.choose_frequency(1);
    form.open_remind_me_list();
    form.choose_remind_me(3);

    assert_eq!(
        form.header(),
        FormHeader {
            title: "Spotify".to_string(),
            amount: "$9.99".to_string(),
            icon_name: Some("Spotify".to_string()),
        }
    );
    assert_eq!(form.start_date_display(), "Apr 1, 2025");

    let record = form.to_subscription("42");
    assert_eq!(record.app.map(|a| a.id), Some("2".to_string()));
    assert_eq!(record.amount, 9.99);
    assert_eq!(record.category.map(|c| c.name), Some("Subscription".to_string()));
    assert_eq!(record.start_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    assert_eq!(record.frequency, Frequency::Monthly);
    assert_eq!(record.remind_me, RemindMe::OneWeekBefore);
    assert!(record.active);
}

#[test]
fn test_search_with_no_match_shows_empty_text() {
    setup();
    let mut form = form(HostPlatform::Android);
    form.open_app_list();
    form.app_list.set_search_query("disney");
    assert!(form.app_list.is_empty());
    assert_eq!(form.app_list.empty_text(), "No apps found");
    assert_eq!(form.choose_app(0), None);
    assert!(form.app_list.is_open());
}

#[test]
fn test_dismissed_date_picker_keeps_start_date() {
    setup();
    let mut form = form(HostPlatform::Ios);
    form.open_date_picker();
    form.date_picker.handle_input(PresenterInput::NativeChanged(NativeDateChange::from_ymd(
        2026, 1, 1,
    )));
    form.date_picker.dismiss();

    assert_eq!(form.confirm_date(), None);
    assert_eq!(form.start_date_display(), "Apr 12, 2025");
}

#[test]
fn test_picker_confirmed_directly_sets_start_date() {
    setup();
    let mut form = form(HostPlatform::Ios);
    form.open_date_picker();
    form.date_picker.handle_input(PresenterInput::NativeChanged(NativeDateChange::from_ymd(
        2026, 1, 5,
    )));
    form.date_picker.confirm();

    assert_eq!(form.start_date(), NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    assert_eq!(form.to_subscription("7").start_date, form.start_date());
}
