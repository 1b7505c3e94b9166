// SPDX-License-Identifier: MPL-2.0
use image_browser::application::port::{FullscreenPort, HostError};
use image_browser::browser::testing::{HostCall, RecordingHost};
use image_browser::browser::{
    BrowserOptions, ImageBrowser, InputEvent, Key, Layout, Message, TouchPoint,
};
use image_browser::domain::gallery::{Image, ImageId};
use image_browser::notifications::Severity;

fn gallery(titles: &[&str]) -> Vec<Image> {
    titles
        .iter()
        .map(|title| Image::new(format!("{title}.jpg")).with_title(*title))
        .collect()
}

fn browser(titles: &[&str]) -> ImageBrowser<RecordingHost> {
    ImageBrowser::mount(gallery(titles), BrowserOptions::default(), RecordingHost::new())
}

fn selected_title(browser: &ImageBrowser<RecordingHost>) -> Option<String> {
    browser
        .state()
        .selected_image()
        .and_then(|image| image.title.clone())
}

fn press(browser: &mut ImageBrowser<RecordingHost>, key: Key) -> bool {
    browser.handle_input(InputEvent::KeyPressed(key))
}

/// Delivers the oldest armed ticket back to the browser.
fn fire(browser: &mut ImageBrowser<RecordingHost>) -> bool {
    match browser.host_mut().fire_next() {
        Some(ticket) => {
            browser.update(Message::SlideshowElapsed(ticket));
            true
        }
        None => false,
    }
}

#[test]
fn wraps_forward_and_backward_through_three_images() {
    let mut browser = browser(&["A", "B", "C"]);
    browser.update(Message::OpenOverlay);
    assert_eq!(browser.view_state().layout, Layout::Slides);
    assert_eq!(selected_title(&browser).as_deref(), Some("A"));

    let mut seen = Vec::new();
    for _ in 0..3 {
        browser.update(Message::Next);
        seen.push(selected_title(&browser).unwrap_or_default());
    }
    assert_eq!(seen, vec!["B", "C", "A"]);

    browser.update(Message::Previous);
    assert_eq!(selected_title(&browser).as_deref(), Some("C"));
    assert_eq!(browser.view_state().current_index, Some(3));
}

#[test]
fn n_steps_return_to_start_in_both_directions() {
    for n in 1..=6 {
        let titles: Vec<String> = (0..n).map(|i| format!("img{i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut browser = browser(&refs);
        browser.update(Message::OpenOverlay);

        for start in 0..n {
            browser.update(Message::Select(ImageId::new(start)));
            for _ in 0..n {
                browser.update(Message::Next);
            }
            assert_eq!(browser.view_state().selection, Some(ImageId::new(start)));
            for _ in 0..n {
                browser.update(Message::Previous);
            }
            assert_eq!(browser.view_state().selection, Some(ImageId::new(start)));
        }
    }
}

#[test]
fn previous_undoes_next_and_index_tracks_selection() {
    let mut browser = browser(&["A", "B", "C", "D"]);
    browser.update(Message::OpenOverlay);
    for start in 0..4 {
        browser.update(Message::Select(ImageId::new(start)));
        browser.update(Message::Next);
        let view = browser.view_state();
        assert_eq!(
            view.current_index,
            view.selection.map(|id| id.position() + 1)
        );
        browser.update(Message::Previous);
        assert_eq!(browser.view_state().selection, Some(ImageId::new(start)));
        assert_eq!(browser.view_state().current_index, Some(start + 1));
    }
}

#[test]
fn info_and_menu_are_never_both_open() {
    let mut browser = browser(&["A", "B"]);
    browser.update(Message::OpenOverlay);

    browser.update(Message::ToggleInfo);
    browser.update(Message::ToggleSlideshowMenu);
    let view = browser.view_state();
    assert!(!view.info_open);
    assert!(view.slideshow_menu_open);

    browser.update(Message::ToggleInfo);
    let view = browser.view_state();
    assert!(view.info_open);
    assert!(!view.slideshow_menu_open);
}

#[test]
fn escape_closes_one_layer_per_press() {
    let mut browser = browser(&["A", "B", "C"]);
    browser.handle_input(InputEvent::TriggerPressed);
    press(&mut browser, Key::Enter);
    press(&mut browser, Key::Character('p'));
    browser.update(Message::StartSlideshow { from: None });

    let view = browser.view_state();
    assert!(view.slideshow_active && view.slideshow_menu_open && view.fullscreen);

    press(&mut browser, Key::Escape);
    let view = browser.view_state();
    assert!(!view.slideshow_active);
    assert!(view.slideshow_menu_open);

    press(&mut browser, Key::Escape);
    let view = browser.view_state();
    assert!(!view.slideshow_menu_open);
    assert!(view.fullscreen);

    press(&mut browser, Key::Escape);
    let view = browser.view_state();
    assert!(!view.fullscreen);
    assert!(view.overlay_open);

    press(&mut browser, Key::Escape);
    assert!(!browser.view_state().overlay_open);
    assert!(!browser.host().is_scroll_locked());

    let before = browser.view_state();
    assert!(!press(&mut browser, Key::Escape));
    assert_eq!(browser.view_state(), before);
}

#[test]
fn escape_closes_info_before_fullscreen() {
    let mut browser = browser(&["A", "B"]);
    browser.update(Message::OpenOverlay);
    press(&mut browser, Key::Enter);
    press(&mut browser, Key::Character('i'));

    press(&mut browser, Key::Escape);
    let view = browser.view_state();
    assert!(!view.info_open);
    assert!(view.fullscreen);
}

#[test]
fn empty_gallery_refuses_to_open_with_one_warning() {
    let mut browser = browser(&[]);
    browser.update(Message::OpenOverlay);

    assert!(!browser.view_state().overlay_open);
    assert_eq!(browser.notifications().visible_count(), 1);
    let notice = browser.notifications().visible().next().map(|n| n.severity());
    assert_eq!(notice, Some(Severity::Warning));
    assert!(browser.host().calls().is_empty());
}

#[test]
fn pause_stops_advances_until_resume() {
    let mut browser = browser(&["A", "B", "C"]);
    browser.update(Message::OpenOverlay);
    browser.update(Message::StartSlideshow { from: None });
    assert_eq!(browser.host().armed().len(), 1);

    assert!(fire(&mut browser));
    assert_eq!(selected_title(&browser).as_deref(), Some("B"));
    assert_eq!(browser.host().armed().len(), 1);

    let stale = browser.host().armed()[0];
    press(&mut browser, Key::Space);
    assert!(browser.view_state().slideshow_paused);
    assert!(browser.host().armed().is_empty());

    // A delivery that raced the pause is ignored.
    browser.update(Message::SlideshowElapsed(stale));
    assert_eq!(selected_title(&browser).as_deref(), Some("B"));
    assert!(!fire(&mut browser));

    press(&mut browser, Key::Space);
    assert!(!browser.view_state().slideshow_paused);
    assert!(fire(&mut browser));
    assert_eq!(selected_title(&browser).as_deref(), Some("C"));
}

#[test]
fn start_from_image_then_stop_releases_fullscreen() {
    let mut browser = browser(&["A", "B", "C"]);
    browser.update(Message::OpenOverlay);
    browser.update(Message::StartSlideshow {
        from: Some(ImageId::new(2)),
    });
    browser.update(Message::TogglePlatformFullscreen);
    assert_eq!(selected_title(&browser).as_deref(), Some("C"));
    assert!(browser.host().is_fullscreen());

    browser.update(Message::StopSlideshow);
    let view = browser.view_state();
    assert!(!view.slideshow_active);
    assert!(!view.slideshow_paused);
    assert!(!browser.host().is_fullscreen());
    assert!(browser.host().armed().is_empty());
    assert!(view.overlay_open);
}

#[test]
fn toggle_reenters_after_platform_left_fullscreen() {
    let mut browser = browser(&["A", "B"]);
    browser.update(Message::OpenOverlay);
    browser.update(Message::TogglePlatformFullscreen);
    assert!(browser.host().is_fullscreen());

    // The user leaves fullscreen through the platform, not the browser.
    browser
        .host_mut()
        .exit_fullscreen()
        .expect("recording host never fails");
    browser.host_mut().clear();

    browser.update(Message::TogglePlatformFullscreen);
    assert_eq!(
        browser.host().calls(),
        &[HostCall::RequestFullscreen(browser.surface())]
    );
    assert!(browser.host().is_fullscreen());
    assert!(browser.presentation().is_platform_fullscreen());
}

#[test]
fn slideshow_ticks_leave_one_armed_ticket() {
    let mut browser = browser(&["A", "B", "C"]);
    browser.update(Message::OpenOverlay);
    browser.update(Message::StartSlideshow { from: None });
    for _ in 0..10 {
        assert!(fire(&mut browser));
        assert_eq!(browser.host().armed().len(), 1);
    }
    let delivered = browser
        .host()
        .calls()
        .iter()
        .filter(|call| matches!(call, HostCall::Delivered(_)))
        .count();
    assert_eq!(delivered, 10);
}

#[test]
fn slideshow_needs_an_open_overlay() {
    let mut browser = browser(&["A", "B"]);
    browser.update(Message::StartSlideshow { from: None });
    assert!(!browser.view_state().slideshow_active);
    assert!(browser.host().armed().is_empty());
}

#[test]
fn failed_platform_fullscreen_degrades_quietly() {
    let mut host = RecordingHost::new();
    host.fail_fullscreen_with(HostError::Unsupported);
    let mut browser = ImageBrowser::mount(gallery(&["A"]), BrowserOptions::default(), host);
    browser.update(Message::OpenOverlay);
    browser.update(Message::TogglePlatformFullscreen);

    assert!(!browser.presentation().is_platform_fullscreen());
    assert!(browser.view_state().overlay_open);

    browser.update(Message::CloseOverlay);
    assert!(!browser.host().is_scroll_locked());
}

#[test]
fn swipes_and_wheel_navigate() {
    let mut browser = browser(&["A", "B", "C"]);
    browser.update(Message::OpenOverlay);

    browser.handle_input(InputEvent::TouchStart(TouchPoint::new(300.0, 100.0)));
    browser.handle_input(InputEvent::TouchEnd(TouchPoint::new(100.0, 110.0)));
    assert_eq!(selected_title(&browser).as_deref(), Some("B"));

    browser.handle_input(InputEvent::Wheel { delta_y: -3.0 });
    assert_eq!(selected_title(&browser).as_deref(), Some("A"));

    browser.handle_input(InputEvent::TouchStart(TouchPoint::new(100.0, 300.0)));
    browser.handle_input(InputEvent::TouchEnd(TouchPoint::new(105.0, 100.0)));
    assert!(browser.view_state().info_open);
}

#[test]
fn selection_changes_scroll_the_visible_strip() {
    let mut browser = browser(&["A", "B", "C"]);
    browser.update(Message::OpenOverlay);
    browser.host_mut().clear();

    browser.update(Message::Next);
    assert!(browser.host().calls().iter().any(|call| matches!(
        call,
        HostCall::ScrollIntoView { image, .. } if *image == ImageId::new(1)
    )));
    let options = browser.host().last_scroll_options().expect("scrolled");
    assert!(options.smooth && options.centered);
}

#[test]
fn unmount_after_slideshow_and_fullscreen_releases_everything() {
    let mut browser = browser(&["A", "B"]);
    browser.update(Message::OpenOverlay);
    browser.update(Message::StartSlideshow { from: None });
    browser.update(Message::TogglePlatformFullscreen);
    browser.unmount();

    let host = browser.host();
    assert!(!host.is_scroll_locked());
    assert!(!host.is_fullscreen());
    assert!(host.armed().is_empty());
}

#[test]
fn thumbnail_click_opens_inline_grid_on_that_image() {
    let mut browser = browser(&["A", "B", "C"]);
    browser.handle_input(InputEvent::ThumbnailClicked(ImageId::new(1)));
    let view = browser.view_state();
    assert!(view.overlay_open);
    assert_eq!(view.current_index, Some(2));
}
