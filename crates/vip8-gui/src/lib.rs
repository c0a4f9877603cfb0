//! # vip8-gui
//!
//! A GUI wrapper for the vip8-core crate

use std::path::Path;

use iced::keyboard;
use iced::time;
use iced::widget::{button, column, text};
use iced::{Element, Fill, Subscription, Task};
use iced_aw::menu::{Item, Menu, MenuBar};
use log::{debug, info, warn};
use rfd::{AsyncFileDialog, FileHandle};

use vip8_core::{Config, CoreError, Interpreter, Seed};

mod constants;
pub use constants::CYCLES_PER_FRAME;
mod keymap;
mod rom;
pub use rom::{RomError, read_rom};
mod widgets;

/// Settings the host is started with
#[derive(Debug, Clone)]
pub struct Options {
    /// Rom to run right away, as read by [`read_rom`]
    pub rom: Option<Vec<u8>>,
    /// Fixed seed for the random number generator, a fresh one is picked on every reset otherwise
    pub seed: Option<u64>,
    pub cycles_per_frame: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rom: None,
            seed: None,
            cycles_per_frame: CYCLES_PER_FRAME,
        }
    }
}

/// Messages that are used for communication between iced widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message that is used as a clock source's signal
    Tick,
    KeyPressed(keyboard::Key),
    KeyReleased(keyboard::Key),
    FileSelectButtonClicked,
    FileSelected(Option<FileHandle>),
    RestartButtonClicked,
}

/// Whether the interpreter gets stepped on the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Execution {
    /// No rom loaded yet
    Idle,
    Running,
    /// The last step failed, nothing runs until a rom is (re)loaded
    Halted(CoreError),
}

/// The main application struct, which constructs GUI and reacts on messages
pub struct Application {
    interpreter: Interpreter,
    display: widgets::Display,
    execution: Execution,
    cycles_per_frame: u16,
    /// Kept around so the program can be restarted
    rom: Option<Vec<u8>>,
}

impl Application {
    /// Starts the interpreter and creates a window with which a user can interact
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use vip8_gui::{Application, Options};
    ///
    /// let _ = Application::run(Options::default());
    /// ```
    pub fn run(options: Options) -> iced::Result {
        info!(
            "starting {} at {} cycles per frame",
            constants::APP_NAME,
            options.cycles_per_frame
        );
        iced::application(
            move || Application::new(&options),
            Application::update,
            Application::view,
        )
        .title(constants::APP_NAME)
        .subscription(Application::subscription)
        .run()
    }

    pub fn new(options: &Options) -> Self {
        let seed = options.seed.map_or(Seed::Entropy, Seed::Fixed);
        let mut application = Self {
            interpreter: Interpreter::with_config(Config { seed }),
            display: widgets::Display::new(),
            execution: Execution::Idle,
            cycles_per_frame: options.cycles_per_frame,
            rom: None,
        };
        info!("random seed: {:?}", application.interpreter.config().seed);
        if let Some(rom) = &options.rom {
            application.start(rom.clone());
        }
        application
    }

    /// Creates a full view of the main window
    pub fn view(&self) -> Element<'_, Message> {
        // Create a menu bar, used to control the state of the interpreter
        let bar = MenuBar::new(vec![Item::with_menu(
            button("File"),
            Menu::new(vec![
                Item::new(
                    button("Select Rom")
                        .on_press(Message::FileSelectButtonClicked)
                        .width(Fill),
                ),
                Item::new(
                    button("Restart")
                        .on_press_maybe(self.rom.as_ref().map(|_| Message::RestartButtonClicked))
                        .width(Fill),
                ),
            ])
            .width(180.0),
        )]);

        let status = match self.execution {
            Execution::Idle => text("No rom loaded"),
            Execution::Running => text(""),
            Execution::Halted(error) => text(format!("Halted: {error}")),
        };

        column![bar, self.display.view(), status]
            .width(Fill)
            .height(Fill)
            .into()
    }

    /// The function, called by iced when there is a message, queued for this application
    pub fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::Tick => self.run_frame(),
            Message::KeyPressed(key) => {
                if keymap::is_quit(&key) {
                    info!("quitting");
                    return iced::exit();
                }
                if let Some(i) = keymap::to_index(&key) {
                    self.interpreter.set_key(i, true)
                }
            }
            Message::KeyReleased(key) => {
                if let Some(i) = keymap::to_index(&key) {
                    self.interpreter.set_key(i, false)
                }
            }

            Message::FileSelectButtonClicked => {
                return Task::perform(
                    AsyncFileDialog::new()
                        .add_filter("Chip8 ROM files".to_string(), &constants::ROM_EXTENSIONS)
                        .pick_file(),
                    Message::FileSelected,
                );
            }

            Message::FileSelected(Some(filehandle)) => self.open(filehandle.path()),
            Message::FileSelected(None) => {}

            Message::RestartButtonClicked => {
                if let Some(rom) = self.rom.take() {
                    self.start(rom);
                }
            }
        }

        Task::none()
    }

    /// Runs one frame worth of instructions, then hands the results to the display
    fn run_frame(&mut self) {
        if self.execution != Execution::Running {
            return;
        }

        for _ in 0..self.cycles_per_frame {
            if let Err(error) = self.interpreter.step() {
                warn!("halting: {error}");
                debug!("screen at halt:\n{}", self.interpreter.framebuffer());
                self.execution = Execution::Halted(error);
                break;
            }
        }

        if self.interpreter.draw_flag() {
            self.display.update(self.interpreter.framebuffer());
            self.interpreter.clear_draw_flag();
        }
        if self.interpreter.beep_flag() {
            // no audio output, the beep only shows up in the log
            info!("beep");
            self.interpreter.clear_beep_flag();
        }
    }

    fn open(&mut self, path: &Path) {
        match rom::read_rom(path) {
            Ok(rom) => {
                info!("loading rom {}", path.display());
                self.start(rom);
            }
            Err(error) => warn!("{error}"),
        }
    }

    /// Loads `rom` into a freshly reset interpreter and starts running it
    fn start(&mut self, rom: Vec<u8>) {
        match self.interpreter.load(&rom) {
            Ok(()) => {
                self.execution = Execution::Running;
                self.rom = Some(rom);
            }
            Err(error) => {
                warn!("{}", RomError::from(error));
                self.execution = Execution::Idle;
                self.rom = None;
            }
        }
        self.display.update(self.interpreter.framebuffer());
    }

    /// Creates a specific task, that is run asynchronously by iced
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed { key, .. } => Some(Message::KeyPressed(key)),
                _ => None,
            }),
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyReleased { key, .. } => Some(Message::KeyReleased(key)),
                _ => None,
            }),
            time::every(constants::TICK_INTERVAL).map(|_| Message::Tick),
        ])
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(rom: &[u8]) -> Application {
        let mut application = Application::new(&Options {
            seed: Some(1),
            ..Options::default()
        });
        application.start(rom.to_vec());
        application
    }

    #[test]
    fn starts_the_rom_it_was_given() {
        let application = Application::new(&Options {
            rom: Some(vec![0x60, 0x07, 0x12, 0x02]),
            seed: Some(9),
            ..Options::default()
        });
        assert_eq!(application.execution, Execution::Running);
        assert_eq!(application.rom.as_deref(), Some(&[0x60, 0x07, 0x12, 0x02][..]));
        assert_eq!(application.interpreter.config(), Config::with_seed(9));
        assert_eq!(application.interpreter.memory()[0x200], 0x60);
    }

    #[test]
    fn nothing_runs_without_a_rom() {
        let mut application = Application::default();
        application.update(Message::Tick);
        assert_eq!(application.execution, Execution::Idle);
        assert_eq!(application.interpreter.program_counter(), 0x200);
    }

    #[test]
    fn runs_a_frame_per_tick() {
        // V0 += 1, jump back
        let mut application = application(&[0x70, 0x01, 0x12, 0x00]);
        application.update(Message::Tick);
        assert_eq!(
            application.interpreter.register(0),
            (CYCLES_PER_FRAME / 2) as u8
        );
        assert!(!application.interpreter.draw_flag());
    }

    #[test]
    fn halts_on_errors_until_restarted() {
        // V0 += 1, then an unknown opcode
        let mut application = application(&[0x70, 0x01, 0xFF, 0xFF]);
        application.update(Message::Tick);
        assert_eq!(
            application.execution,
            Execution::Halted(CoreError::UnknownOpcode {
                opcode: 0xFFFF,
                address: 0x202
            })
        );

        application.update(Message::Tick);
        assert_eq!(application.interpreter.register(0), 1);

        application.update(Message::RestartButtonClicked);
        assert_eq!(application.execution, Execution::Running);
        assert_eq!(application.interpreter.register(0), 0);
    }

    #[test]
    fn forwards_keys_to_the_interpreter() {
        let mut application = application(&[0x12, 0x00]);
        application.update(Message::KeyPressed(keyboard::Key::Character("e".into())));
        assert!(application.interpreter.keys()[0x6]);
        application.update(Message::KeyReleased(keyboard::Key::Character("e".into())));
        assert!(!application.interpreter.keys()[0x6]);
    }
}
