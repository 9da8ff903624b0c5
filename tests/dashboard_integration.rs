//! Dashboard interaction tests on a ratatui `TestBackend`.
//!
//! These drive the real render path and the real dispatch ordering: every
//! simulated press first goes through the outside observers (capture), then
//! through the hit-area registry, exactly like the event loop.

use hiretrack::app::{App, AppMessage, MONTH_DROPDOWN, MONTH_TOGGLE};
use hiretrack::config::AppConfig;
use hiretrack::models::{ApplicationStatus, Candidate, MonthRef};
use hiretrack::ui;
use hiretrack::ui::interaction::{ClickAction, PointerEvent};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn test_app() -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(&AppConfig::default().with_skip_initial_fetch(true));
    app.months = vec![MonthRef::new(2024, 2), MonthRef::new(2024, 1)];
    let rx = app.message_rx.take().unwrap();
    (app, rx)
}

fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap()
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
}

/// Dispatch a press the way the event loop does: observers first, then
/// hit-area dispatch.
fn press(app: &mut App, column: u16, row: u16) {
    app.outside
        .notify(PointerEvent::new(column, row), &app.regions);
    if let Some(action) = app.hit_registry.hit_test(column, row) {
        ui::handle_click_action(app, action);
    }
}

/// Apply everything background tasks and observers have posted so far.
fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    while let Ok(message) = rx.try_recv() {
        app.handle_message(message);
    }
}

/// Find a screen position whose topmost hit area matches the predicate.
fn find_press_target(app: &App, pred: impl Fn(&ClickAction) -> bool) -> (u16, u16) {
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            if let Some(action) = app.hit_registry.hit_test(column, row) {
                if pred(&action) {
                    return (column, row);
                }
            }
        }
    }
    panic!("no hit area matched");
}

fn candidate(id: i64, name: &str) -> Candidate {
    Candidate {
        application_id: id,
        candidate_name: name.to_string(),
        role_name: "Backend Engineer".to_string(),
        rating: 4.0,
        application_date: "2024-01-15".parse().unwrap(),
        attachments: 1,
        status: ApplicationStatus::Pending,
        stage: None,
    }
}

#[tokio::test]
async fn test_toggle_button_opens_and_closes_dropdown() {
    let (mut app, mut rx) = test_app();
    let mut terminal = test_terminal();

    draw(&mut terminal, &mut app);
    let toggle = find_press_target(&app, |a| *a == ClickAction::ToggleMonthDropdown);

    press(&mut app, toggle.0, toggle.1);
    pump(&mut app, &mut rx);
    assert!(app.month_dropdown_open());

    // The toggle is excluded from the dropdown's outside detection, so a
    // second press toggles closed instead of dismiss-then-reopen.
    draw(&mut terminal, &mut app);
    press(&mut app, toggle.0, toggle.1);
    pump(&mut app, &mut rx);
    assert!(!app.month_dropdown_open());
}

#[tokio::test]
async fn test_press_inside_dropdown_does_not_dismiss() {
    let (mut app, mut rx) = test_app();
    let mut terminal = test_terminal();

    app.open_month_dropdown();
    draw(&mut terminal, &mut app);

    // The overlay border is inside the surface but carries no hit action.
    let surface = app.regions.resolve(MONTH_DROPDOWN);
    assert_eq!(surface.len(), 1);
    press(&mut app, surface[0].x, surface[0].y);
    pump(&mut app, &mut rx);

    assert!(app.month_dropdown_open());
}

#[tokio::test]
async fn test_press_elsewhere_dismisses_dropdown() {
    let (mut app, mut rx) = test_app();
    let mut terminal = test_terminal();

    app.open_month_dropdown();
    draw(&mut terminal, &mut app);

    // Top-right corner: outside the overlay and the toggle.
    press(&mut app, WIDTH - 1, 0);
    pump(&mut app, &mut rx);
    assert!(!app.month_dropdown_open());

    // Once closed (observer detached), further presses post nothing.
    draw(&mut terminal, &mut app);
    press(&mut app, WIDTH - 1, 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_selecting_month_sets_filter_and_closes() {
    let (mut app, mut rx) = test_app();
    let mut terminal = test_terminal();

    app.open_month_dropdown();
    draw(&mut terminal, &mut app);

    let target = find_press_target(&app, |a| {
        *a == ClickAction::SelectMonth(MonthRef::new(2024, 2))
    });
    press(&mut app, target.0, target.1);
    pump(&mut app, &mut rx);

    assert_eq!(app.month_filter, Some(MonthRef::new(2024, 2)));
    assert!(!app.month_dropdown_open());
}

#[tokio::test]
async fn test_toggle_region_registered_every_frame() {
    let (mut app, _rx) = test_app();
    let mut terminal = test_terminal();

    draw(&mut terminal, &mut app);
    assert_eq!(app.regions.resolve(MONTH_TOGGLE).len(), 1);

    // Regions are rebuilt, not accumulated, across frames.
    draw(&mut terminal, &mut app);
    assert_eq!(app.regions.resolve(MONTH_TOGGLE).len(), 1);
}

#[tokio::test]
async fn test_clicking_candidate_row_opens_detail() {
    let (mut app, mut rx) = test_app();
    let mut terminal = test_terminal();
    app.candidates = vec![candidate(1, "Ada Lovelace"), candidate(2, "Grace Hopper")];

    draw(&mut terminal, &mut app);
    let target = find_press_target(&app, |a| *a == ClickAction::SelectCandidate(2));
    press(&mut app, target.0, target.1);
    pump(&mut app, &mut rx);

    assert_eq!(app.screen, hiretrack::app::Screen::Detail);
}

#[tokio::test]
async fn test_dropdown_overlay_hit_areas_sit_above_table() {
    let (mut app, _rx) = test_app();
    let mut terminal = test_terminal();
    // Enough rows that the table would occupy the overlay's position.
    app.candidates = (1..=20)
        .map(|i| candidate(i, &format!("Candidate {}", i)))
        .collect();

    app.open_month_dropdown();
    draw(&mut terminal, &mut app);

    // Every month entry must win the hit test over the rows beneath it.
    let target = find_press_target(&app, |a| {
        *a == ClickAction::SelectMonth(MonthRef::new(2024, 1))
    });
    assert!(matches!(
        app.hit_registry.hit_test(target.0, target.1),
        Some(ClickAction::SelectMonth(_))
    ));
}
