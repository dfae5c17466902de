use super::*;
use crate::{
    config::PresenterConfig,
    deck::{Deck, Note, Slide},
    input::{InputEvent, InputProvider},
    render::Screen,
};

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

struct FaultyInput;

impl InputProvider for FaultyInput {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Err(())
    }
}

fn make_deck(slides: &[(u16, &[&str])]) -> Deck {
    let mut deck = Deck::new();
    for (number, notes) in slides {
        let mut slide = Slide::new(*number);
        for note in *notes {
            slide.notes.push(Note::try_from(*note).unwrap()).unwrap();
        }
        deck.push_slide(slide).unwrap();
    }
    deck
}

#[test]
fn boot_requests_exactly_one_initial_render() {
    let deck = make_deck(&[(1, &["short"])]);
    let mut app = PresenterApp::new(&deck, ScriptedInput::new(&[]), PresenterConfig::default());

    assert_eq!(app.tick(), TickResult::RenderRequested);
    assert_eq!(app.tick(), TickResult::NoRender);
}

#[test]
fn advance_saturates_at_the_slide_count() {
    let deck = make_deck(&[(1, &[]), (2, &[]), (3, &[])]);
    let events = [
        InputEvent::Advance,
        InputEvent::Advance,
        InputEvent::Advance,
        InputEvent::Advance,
    ];
    let mut app = PresenterApp::new(&deck, ScriptedInput::new(&events), PresenterConfig::default());

    assert_eq!(app.tick(), TickResult::RenderRequested);
    assert_eq!(app.current_index(), 3);
}

#[test]
fn retreat_stops_at_zero() {
    let deck = make_deck(&[(1, &[]), (2, &[])]);
    let events = [InputEvent::Retreat, InputEvent::Retreat, InputEvent::Retreat];
    let mut app = PresenterApp::new(&deck, ScriptedInput::new(&events), PresenterConfig::default());

    let _ = app.tick();
    assert_eq!(app.current_index(), 0);

    let mut saw_no_slide = None;
    app.with_screen(|screen| match screen {
        Screen::NoSlide {
            requested,
            deck_empty,
        } => saw_no_slide = Some((requested, deck_empty)),
        Screen::Notes { .. } => saw_no_slide = None,
    });
    assert_eq!(saw_no_slide, Some((0, false)));
}

#[test]
fn boundary_noop_still_requests_a_render() {
    let deck = make_deck(&[(1, &[])]);
    let mut app = PresenterApp::new(&deck, ScriptedInput::new(&[]), PresenterConfig::default());
    let _ = app.tick();

    app.advance();
    assert_eq!(app.current_index(), 1);
    assert_eq!(app.tick(), TickResult::RenderRequested);

    app.retreat();
    app.retreat();
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.tick(), TickResult::RenderRequested);
}

#[test]
fn resolved_slide_renders_label_and_notes() {
    let deck = make_deck(&[(1, &["short"])]);
    let config = PresenterConfig::default();
    let app = PresenterApp::new(&deck, ScriptedInput::new(&[]), config);

    let mut seen = None;
    app.with_screen(|screen| {
        if let Screen::Notes { plan } = screen {
            seen = Some((
                heapless::String::<8>::try_from(plan.label.text).unwrap(),
                plan.lines.len(),
                heapless::String::<32>::try_from(plan.lines[0].text).unwrap(),
                (plan.lines[0].x, plan.lines[0].y),
            ));
        }
    });

    let (label, line_count, first_line, origin) = seen.unwrap();
    assert_eq!(label.as_str(), "1");
    assert_eq!(line_count, 1);
    assert_eq!(first_line.as_str(), "short");
    assert_eq!(origin, config.layout.note_origin);
}

#[test]
fn unmatched_index_renders_no_slide() {
    let deck = make_deck(&[(1, &["short"])]);
    let config = PresenterConfig {
        initial_slide: 2,
        ..PresenterConfig::default()
    };
    let app = PresenterApp::new(&deck, ScriptedInput::new(&[]), config);

    let mut outcome = None;
    app.with_screen(|screen| {
        if let Screen::NoSlide {
            requested,
            deck_empty,
        } = screen
        {
            outcome = Some((requested, deck_empty));
        }
    });
    assert_eq!(outcome, Some((2, false)));
}

#[test]
fn lookup_miss_on_a_gapped_deck_leaves_the_index_committed() {
    let deck = make_deck(&[(1, &["one"]), (3, &["three"]), (4, &["four"])]);
    let events = [InputEvent::Advance];
    let mut app = PresenterApp::new(&deck, ScriptedInput::new(&events), PresenterConfig::default());

    let _ = app.tick();
    assert_eq!(app.current_index(), 2);

    let mut missed = false;
    app.with_screen(|screen| missed = matches!(screen, Screen::NoSlide { .. }));
    assert!(missed);
    assert_eq!(app.current_index(), 2);

    app.advance();
    let mut third = None;
    app.with_screen(|screen| {
        if let Screen::Notes { plan } = screen {
            third = Some(heapless::String::<32>::try_from(plan.lines[0].text).unwrap());
        }
    });
    assert_eq!(third.unwrap().as_str(), "three");
}

#[test]
fn empty_deck_renders_its_own_signal_and_never_panics() {
    let deck = Deck::new();
    let mut app = PresenterApp::new(&deck, ScriptedInput::new(&[]), PresenterConfig::default());

    let _ = app.tick();

    let mut outcome = None;
    app.with_screen(|screen| {
        if let Screen::NoSlide {
            requested,
            deck_empty,
        } = screen
        {
            outcome = Some((requested, deck_empty));
        }
    });
    assert_eq!(outcome, Some((1, true)));
}

#[test]
fn idle_mock_input_settles_after_the_boot_render() {
    let deck = make_deck(&[(1, &["short"])]);
    let mut app = PresenterApp::new(
        &deck,
        crate::input::mock::MockInput::new(),
        PresenterConfig::default(),
    );

    assert_eq!(app.tick(), TickResult::RenderRequested);
    assert_eq!(app.tick(), TickResult::NoRender);
    assert_eq!(app.current_index(), 1);
}

#[test]
fn input_faults_do_not_move_the_index() {
    let deck = make_deck(&[(1, &[]), (2, &[])]);
    let mut app = PresenterApp::new(&deck, FaultyInput, PresenterConfig::default());

    let _ = app.tick();
    assert_eq!(app.current_index(), 1);
}
