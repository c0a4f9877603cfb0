use vip8_core::{
    Config, CoreError, DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT, Framebuffer, Instruction,
    Interpreter, MAX_ROM_SIZE, NUM_REGISTERS, RAM_SIZE, ROM_START_ADDRESS, RomTooLarge,
};

fn interpreter() -> Interpreter {
    Interpreter::with_config(Config::with_seed(0xC8))
}

fn loaded(rom: &[u8]) -> Interpreter {
    let mut interpreter = interpreter();
    interpreter.load(rom).unwrap();
    interpreter
}

/// Everything a program can observe, used to compare whole machine states
type Snapshot = (Vec<u8>, Vec<u8>, u16, u16, u8, u8, u8, Vec<u8>, [bool; 16]);

fn snapshot(interpreter: &Interpreter) -> Snapshot {
    (
        interpreter.memory().to_vec(),
        (0..NUM_REGISTERS).map(|x| interpreter.register(x)).collect(),
        interpreter.program_counter(),
        interpreter.index_register(),
        interpreter.stack_depth(),
        interpreter.delay_timer(),
        interpreter.sound_timer(),
        interpreter.framebuffer().as_bytes().to_vec(),
        *interpreter.keys(),
    )
}

#[test]
fn empty_rom_leaves_power_on_state() {
    let interpreter = loaded(&[]);

    let memory = interpreter.memory();
    assert_eq!(memory.len(), RAM_SIZE as usize);
    assert_eq!(&memory[..FONT.len()], &FONT[..]);
    assert!(memory[FONT.len()..].iter().all(|byte| *byte == 0));

    assert_eq!(interpreter.program_counter(), ROM_START_ADDRESS);
    assert_eq!(interpreter.index_register(), 0);
    assert_eq!(interpreter.stack_depth(), 0);
    assert_eq!(interpreter.delay_timer(), 0);
    assert_eq!(interpreter.sound_timer(), 0);
    assert!((0..NUM_REGISTERS).all(|x| interpreter.register(x) == 0));
    assert_eq!(interpreter.framebuffer(), &Framebuffer::new());
    assert_eq!(interpreter.keys(), &[false; 16]);
    assert!(interpreter.draw_flag());
    assert!(!interpreter.beep_flag());
}

#[test]
fn rom_lands_at_0x200() {
    let interpreter = loaded(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let start = ROM_START_ADDRESS as usize;
    assert_eq!(&interpreter.memory()[start..start + 4], &[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(interpreter.memory()[start + 4], 0);
}

#[test]
fn reset_twice_is_the_same_as_once() {
    let mut interpreter = loaded(&[0x60, 0x12, 0xA3, 0x00, 0xF0, 0x55, 0x22, 0x00]);
    for _ in 0..4 {
        interpreter.step().unwrap();
    }
    interpreter.set_key(0xA, true);

    interpreter.reset();
    let once = snapshot(&interpreter);
    interpreter.reset();
    assert_eq!(snapshot(&interpreter), once);
    assert_eq!(snapshot(&interpreter), snapshot(&loaded(&[])));
}

#[test]
fn oversized_rom_is_rejected_and_leaves_reset_state() {
    let mut interpreter = loaded(&[0x12, 0x00]);
    let rom = vec![0x11; MAX_ROM_SIZE + 1];
    let error = interpreter.load(&rom).unwrap_err();
    assert_eq!(
        error,
        RomTooLarge {
            size: 3585,
            max_size: 3584
        }
    );
    assert_eq!(snapshot(&interpreter), snapshot(&loaded(&[])));
}

#[test]
fn add_sets_carry_exactly_on_overflow() {
    let cases = [
        (0x00, 0x00, 0x00, 0),
        (0x7F, 0x80, 0xFF, 0),
        (0x80, 0x80, 0x00, 1),
        (0xFF, 0x01, 0x00, 1),
        (0xFF, 0xFF, 0xFE, 1),
    ];
    for (vx, vy, sum, carry) in cases {
        // V1 = vx, V2 = vy, V1 += V2
        let mut interpreter = loaded(&[0x61, vx, 0x62, vy, 0x81, 0x24]);
        for _ in 0..3 {
            interpreter.step().unwrap();
        }
        assert_eq!(interpreter.register(1), sum, "{vx:#04X} + {vy:#04X}");
        assert_eq!(interpreter.register(0xF), carry, "{vx:#04X} + {vy:#04X}");
    }
}

#[test]
fn call_then_return_resumes_after_the_call() {
    // 0x200: call 0x206
    // 0x202: V0 = 0x42
    // 0x204: jump to self
    // 0x206: V1 = 0x01
    // 0x208: return
    let mut interpreter = loaded(&[0x22, 0x06, 0x60, 0x42, 0x12, 0x04, 0x61, 0x01, 0x00, 0xEE]);

    interpreter.step().unwrap();
    assert_eq!(interpreter.program_counter(), 0x206);
    assert_eq!(interpreter.stack_depth(), 1);

    interpreter.step().unwrap();
    interpreter.step().unwrap();
    assert_eq!(interpreter.program_counter(), 0x202);
    assert_eq!(interpreter.stack_depth(), 0);

    interpreter.step().unwrap();
    assert_eq!(interpreter.register(0), 0x42);
    assert_eq!(interpreter.register(1), 0x01);
}

#[test]
fn deep_recursion_overflows_the_stack() {
    // 0x200: call 0x200, forever
    let mut interpreter = loaded(&[0x22, 0x00]);
    for depth in 1..=16 {
        interpreter.step().unwrap();
        assert_eq!(interpreter.stack_depth(), depth);
    }
    assert_eq!(
        interpreter.step(),
        Err(CoreError::StackOverflow { address: 0x200 })
    );
    assert_eq!(interpreter.stack_depth(), 16);
}

#[test]
fn drawing_the_same_sprite_twice_erases_it() {
    // I = glyph for 8, V0 = 20, V1 = 10, draw, draw
    let mut interpreter = loaded(&[
        0x62, 0x08, 0xF2, 0x29, 0x60, 0x14, 0x61, 0x0A, 0xD0, 0x15, 0xD0, 0x15,
    ]);
    for _ in 0..5 {
        interpreter.step().unwrap();
    }
    assert_eq!(interpreter.register(0xF), 0);
    let lit = interpreter
        .framebuffer()
        .as_bytes()
        .iter()
        .filter(|pixel| **pixel == 1)
        .count();
    // F0 90 F0 90 F0
    assert_eq!(lit, 4 + 2 + 4 + 2 + 4);
    assert!(interpreter.framebuffer().is_lit(20, 10));

    interpreter.clear_draw_flag();
    interpreter.step().unwrap();
    assert_eq!(interpreter.register(0xF), 1);
    assert_eq!(interpreter.framebuffer(), &Framebuffer::new());
    assert!(interpreter.draw_flag());
}

#[test]
fn sprites_wrap_around_the_screen() {
    // V0 = 63, V1 = 31, I = font glyph 0, draw 5 rows
    let mut interpreter = loaded(&[0x60, 0x3F, 0x61, 0x1F, 0xA0, 0x00, 0xD0, 0x15]);
    for _ in 0..4 {
        interpreter.step().unwrap();
    }
    let framebuffer = interpreter.framebuffer();
    let right = DISPLAY_WIDTH as usize - 1;
    let bottom = DISPLAY_HEIGHT as usize - 1;
    // first row of the glyph (F0) starts in the bottom right corner
    assert!(framebuffer.is_lit(right, bottom));
    assert!(framebuffer.is_lit(0, bottom));
    assert!(framebuffer.is_lit(2, bottom));
    assert!(!framebuffer.is_lit(3, bottom));
    // the second row (90) continues at the top
    assert!(framebuffer.is_lit(right, 0));
    assert!(!framebuffer.is_lit(0, 0));
    assert!(framebuffer.is_lit(2, 0));
}

#[test]
fn wait_for_key_blocks_until_a_key_is_down() {
    // V7 = K, then jump to self
    let mut interpreter = loaded(&[0xF7, 0x0A, 0x12, 0x02]);
    for _ in 0..10 {
        interpreter.step().unwrap();
        assert_eq!(interpreter.program_counter(), 0x200);
    }
    interpreter.keys_mut()[3] = true;
    interpreter.step().unwrap();
    assert_eq!(interpreter.register(7), 3);
    assert_eq!(interpreter.program_counter(), 0x202);
}

#[test]
fn timers_run_down_once_per_step() {
    // V0 = 3, delay = V0, sound = V0, jump to self
    let mut interpreter = loaded(&[0x60, 0x03, 0xF0, 0x15, 0xF0, 0x18, 0x12, 0x06]);
    interpreter.step().unwrap();
    interpreter.step().unwrap();
    assert_eq!(interpreter.delay_timer(), 2);
    interpreter.step().unwrap();
    assert_eq!(interpreter.delay_timer(), 1);
    assert_eq!(interpreter.sound_timer(), 2);

    interpreter.step().unwrap();
    interpreter.step().unwrap();
    assert_eq!(interpreter.delay_timer(), 0);
    assert_eq!(interpreter.sound_timer(), 0);
    assert!(interpreter.beep_flag());

    interpreter.clear_beep_flag();
    interpreter.step().unwrap();
    assert_eq!(interpreter.delay_timer(), 0);
    assert!(!interpreter.beep_flag());
}

#[test]
fn bcd_then_load_round_trips_the_digits() {
    // V5 = 254, I = 0x300, BCD of V5, read V0..V2 back
    let mut interpreter = loaded(&[0x65, 0xFE, 0xA3, 0x00, 0xF5, 0x33, 0xF2, 0x65]);
    for _ in 0..4 {
        interpreter.step().unwrap();
    }
    assert_eq!(
        [interpreter.register(0), interpreter.register(1), interpreter.register(2)],
        [2, 5, 4]
    );
    assert_eq!(interpreter.index_register(), 0x303);
}

#[test]
fn same_seed_draws_the_same_numbers() {
    let rom = [0xC0, 0xFF, 0xC1, 0xFF, 0xC2, 0xFF, 0xC3, 0xFF];
    let mut first = loaded(&rom);
    let mut second = loaded(&rom);
    for _ in 0..4 {
        first.step().unwrap();
        second.step().unwrap();
    }
    for x in 0..4 {
        assert_eq!(first.register(x), second.register(x));
    }
}

#[test]
fn failed_steps_change_nothing() {
    let roms: [&[u8]; 4] = [
        // unknown opcode
        &[0x60, 0x05, 0xF0, 0x15, 0xFF, 0xFF],
        // return with an empty stack
        &[0x60, 0x05, 0xF0, 0x15, 0x00, 0xEE],
        // store registers past the end of ram
        &[0x60, 0x05, 0xF0, 0x15, 0xAF, 0xFF, 0xF1, 0x55],
        // draw a sprite read past the end of ram
        &[0x60, 0x05, 0xF0, 0x15, 0xAF, 0xFE, 0xD0, 0x04],
    ];
    for rom in roms {
        let mut interpreter = loaded(rom);
        let good_steps = rom.len() / 2 - 1;
        for _ in 0..good_steps {
            interpreter.step().unwrap();
        }
        let before = snapshot(&interpreter);
        assert!(interpreter.step().is_err());
        assert_eq!(snapshot(&interpreter), before);
    }
}

#[test]
fn unknown_opcodes_report_where_they_were_found() {
    let mut interpreter = loaded(&[0x12, 0x04, 0x00, 0x00, 0xF0, 0xFF]);
    interpreter.step().unwrap();
    assert_eq!(
        interpreter.current_instruction(),
        Err(CoreError::UnknownOpcode {
            opcode: 0xF0FF,
            address: 0x204
        })
    );
    assert_eq!(
        interpreter.step(),
        Err(CoreError::UnknownOpcode {
            opcode: 0xF0FF,
            address: 0x204
        })
    );
}

#[test]
fn current_instruction_decodes_without_running() {
    let interpreter = loaded(&[0xD0, 0x15]);
    assert_eq!(
        interpreter.current_instruction(),
        Ok(Instruction::Display { x: 0, y: 1, n: 5 })
    );
    assert_eq!(interpreter.program_counter(), 0x200);
}
