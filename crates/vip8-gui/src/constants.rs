use iced::time::Duration;

pub const APP_NAME: &str = "vip8";
// 60 times a second (kind of, it should have been 16.667 )
pub const TICK_INTERVAL: Duration = Duration::from_millis(17);
/// How many instructions the interpreter executes for every frame. This decides how fast programs run
pub const CYCLES_PER_FRAME: u16 = 10;
/// Extensions offered by the rom picker
pub const ROM_EXTENSIONS: [&str; 2] = ["ch8", "8o"];
