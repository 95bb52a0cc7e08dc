//! Clock Quiz entry point
//!
//! On the web the page drives `clock_quiz::web::WebQuiz`; natively this runs
//! a small terminal version of the game.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    clock_quiz::web::init();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Clock Quiz (native) starting...");
    terminal::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};
    use std::time::{SystemTime, UNIX_EPOCH};

    use clock_quiz::consts::HOST_DT;
    use clock_quiz::quiz::{AnswerOutcome, Effects, Quiz};
    use clock_quiz::{RenderPlan, Settings};

    /// Terminal stand-ins for confetti and the alarm bell
    struct TerminalEffects {
        confetti: bool,
        sound: bool,
    }

    impl Effects for TerminalEffects {
        fn play_celebration(&mut self) {
            if self.confetti {
                println!("  * . * . * . * . * . *");
            }
        }

        fn play_sound(&mut self) {
            if self.sound {
                // Terminal bell
                print!("\x07");
                let _ = io::stdout().flush();
            }
        }
    }

    fn describe(plan: &RenderPlan) -> String {
        format!(
            "hour hand {:>5.1}°, minute hand {:>5.1}°",
            plan.hour_hand.angle, plan.minute_hand.angle
        )
    }

    pub fn run() {
        let settings = Settings::load();
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut quiz = Quiz::new(seed).with_settings(&settings);
        let mut fx = TerminalEffects {
            confetti: settings.effective_confetti(),
            sound: settings.sound_enabled,
        };

        println!("Flexi is asleep! Pick the time on the clock to ring the alarm.");
        println!("Type 1-4 to answer, r to reset, q to quit.\n");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            let plan = quiz.render_plan(settings.base_clock_size, settings.border_color);
            println!("Clock: {}", describe(&plan));
            let buttons = quiz.buttons();
            for (i, button) in buttons.iter().enumerate() {
                println!("  {}) {}", i + 1, button.label);
            }
            if quiz.state().feedback.show_snooze {
                println!("  Z z z ...");
            }
            print!("> ");
            let _ = io::stdout().flush();

            let Some(Ok(line)) = lines.next() else {
                break;
            };
            let input = line.trim();
            let label = match input {
                "q" => break,
                "r" => {
                    quiz.reset();
                    continue;
                }
                _ => match input.parse::<usize>() {
                    Ok(n @ 1..=4) => buttons[n - 1].label.clone(),
                    // Free-typed answers are accepted too
                    _ => input.to_string(),
                },
            };

            match quiz.handle_answer(&label, &mut fx) {
                AnswerOutcome::Correct => {
                    if let Some(message) = &quiz.state().feedback.wake_message {
                        println!("{}", message);
                    }
                    // Let the feedback play out in real time, one host frame at a time
                    while !quiz.tick(HOST_DT) {
                        std::thread::sleep(HOST_DT);
                    }
                    println!();
                }
                AnswerOutcome::Incorrect => println!("Not quite. Flexi is still snoozing."),
                AnswerOutcome::Ignored => {}
            }
        }

        log::info!("Bye!");
    }
}
