//! Terminal desktop app: a DOS-style prompt that can host the Snake game.
//!
//! While a game exists, keyboard input is captured by a window-level keydown listener and routed
//! to the [`session::GameSession`]; the prompt is hidden until the game is quit.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod commands;
pub mod session;
pub mod snake;

use std::rc::Rc;

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::ev::KeyboardEvent;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use platform_host_web::{HostRandomSource, WebIntervalScheduler};

use crate::commands::{banner_lines, run_command, ClockReading, TerminalAction, PROMPT};
use crate::session::{GameSession, KeyDisposition};
use crate::snake::{CellKind, GamePhase, GridPoint, SnakeGame, SnakeKey, GRID_SIZE};

const MAX_TRANSCRIPT_LINES: usize = 200;

fn append_transcript(transcript: &mut Vec<String>, lines: impl IntoIterator<Item = String>) {
    transcript.extend(lines);
    if transcript.len() > MAX_TRANSCRIPT_LINES {
        let overflow = transcript.len() - MAX_TRANSCRIPT_LINES;
        transcript.drain(0..overflow);
    }
}

fn apply_command(
    transcript: &mut Vec<String>,
    line: &str,
    clock: ClockReading,
) -> Option<TerminalAction> {
    let outcome = run_command(line, clock);
    if outcome.action == Some(TerminalAction::ClearScreen) {
        transcript.clear();
        transcript.push(PROMPT.to_string());
        return outcome.action;
    }

    let echo = format!("{PROMPT} {}", line.trim());
    append_transcript(transcript, std::iter::once(echo).chain(outcome.lines));
    outcome.action
}

fn cell_class(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Empty => "snake-cell",
        CellKind::Head => "snake-cell snake-head",
        CellKind::Body => "snake-cell snake-body",
        CellKind::Food => "snake-cell snake-food",
    }
}

fn game_status(game: &SnakeGame) -> String {
    match game.phase() {
        GamePhase::Running => format!("Score: {}", game.score()),
        GamePhase::Paused => format!("Score: {}  PAUSED (Space to resume)", game.score()),
        GamePhase::Ended => format!("GAME OVER! Final score: {}. Press Q to exit.", game.score()),
    }
}

fn render_board(game: &SnakeGame) -> View {
    (0..GRID_SIZE)
        .map(|y| {
            let cells = (0..GRID_SIZE)
                .map(|x| {
                    let kind = game.cell_at(GridPoint::new(x, y));
                    view! { <div class=cell_class(kind)></div> }
                })
                .collect_view();
            view! { <div class="snake-row">{cells}</div> }
        })
        .collect_view()
}

#[component]
/// Terminal app window contents.
///
/// `exit` closes the hosting window through the mount context's controls; `snake` starts the
/// game, which is quit (and its timer released) when the window unmounts.
pub fn TerminalApp(
    /// Runtime mount context for the hosting window.
    context: AppMountContext,
) -> impl IntoView {
    let input_id = window_primary_input_dom_id(context.window_id);
    let controls = context.controls;
    let transcript = create_rw_signal(banner_lines());
    let input = create_rw_signal(String::new());
    let session = create_rw_signal(GameSession::new(
        Rc::new(WebIntervalScheduler),
        Box::new(HostRandomSource),
        Rc::new(|| {}),
    ));
    session.update_untracked(|state| {
        state.set_tick_callback(Rc::new(move || {
            let _ = session.try_update(|state| state.tick());
        }));
    });
    let game_active = create_memo(move |_| session.with(GameSession::is_active));

    let keydown_listener = store_value(None::<WindowListenerHandle>);
    let detach_keydown = move || {
        let _ = keydown_listener.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.remove();
            }
        });
    };

    create_effect(move |_| {
        if !game_active.get() {
            detach_keydown();
            return;
        }
        if keydown_listener.with_value(Option::is_some) {
            return;
        }

        let handle = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
            let key = SnakeKey::from_key_name(&ev.key());
            let disposition = session
                .try_update(|state| state.handle_key(key))
                .unwrap_or(KeyDisposition::NotActive);
            match disposition {
                KeyDisposition::Consumed => ev.prevent_default(),
                KeyDisposition::Quit => {
                    ev.prevent_default();
                    transcript.update(|lines| append_transcript(lines, [PROMPT.to_string()]));
                }
                KeyDisposition::Ignored | KeyDisposition::NotActive => {}
            }
        });
        keydown_listener.set_value(Some(handle));
    });

    on_cleanup(move || {
        detach_keydown();
        let _ = session.try_update(GameSession::quit);
    });

    let submit = move || {
        let line = input.get_untracked();
        input.set(String::new());

        let mut action = None;
        transcript.update(|lines| action = apply_command(lines, &line, ClockReading::now()));
        match action {
            Some(TerminalAction::StartSnake) => session.update(GameSession::start),
            Some(TerminalAction::CloseWindow) => controls.close(),
            Some(TerminalAction::ClearScreen) | None => {}
        }
    };

    let prompt_row = move || {
        view! {
            <div class="terminal-input-row">
                <label class="terminal-prompt" for=input_id.clone()>{PROMPT}</label>
                <input
                    id=input_id.clone()
                    class="terminal-input"
                    type="text"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                    autocomplete="off"
                    spellcheck="false"
                />
            </div>
        }
    };

    view! {
        <div class="app-shell app-terminal-shell">
            <div class="terminal-screen" role="log" aria-live="polite">
                {move || {
                    transcript
                        .get()
                        .into_iter()
                        .map(|line| view! { <div class="terminal-line">{line}</div> })
                        .collect_view()
                }}
            </div>

            <Show when=move || game_active.get() fallback=prompt_row>
                <div class="snake-game">
                    <div class="snake-status">
                        {move || session.with(|state| state.game().map(game_status).unwrap_or_default())}
                    </div>
                    <div class="snake-board">
                        {move || session.with(|state| state.game().map(render_board))}
                    </div>
                </div>
            </Show>
        </div>
    }
}
