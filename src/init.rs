//! Power-on register sequence
//!
//! The ST7735S comes out of reset in an undefined state. [`INIT_SEQUENCE`]
//! is the ordered list of register writes that brings it to a state where
//! it accepts pixel data. Entries depend on the ones before them and must be
//! sent in order, each followed by its settle delay.
//!
//! The final MADCTL write that applies the configured rotation is not part
//! of the table; [`Display::initialize`](crate::Display::initialize) sends it
//! after the last entry.

use crate::command::{
    COLOR_MODE, COLOR_MODE_16BIT, COLUMN_ADDRESS_SET, DISPLAY_ON, FRAME_RATE_CONTROL,
    GAMMA_ENABLE, GAMMA_NEGATIVE, GAMMA_POSITIVE, MEMORY_ACCESS_CONTROL, NORMAL_MODE_ON,
    POWER_CONTROL_1, POWER_CONTROL_2, PUMP_FREQUENCY, ROW_ADDRESS_SET, SLEEP_OUT, SOFT_RESET,
    SOURCE_OUTPUT_DIRECTION,
};

/// One register write of the initialization sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitCommand {
    /// Command byte, sent with DC low
    pub command: u8,
    /// Parameter bytes, sent with DC high (may be empty)
    pub params: &'static [u8],
    /// Settle time after the write, in milliseconds
    pub delay_ms: u32,
}

impl InitCommand {
    const fn new(command: u8, params: &'static [u8], delay_ms: u32) -> Self {
        Self {
            command,
            params,
            delay_ms,
        }
    }
}

/// MADCTL value establishing the controller's native scan order
///
/// Row/column address order with bottom-to-top refresh and BGR. Overridden
/// by the rotation write at the end of initialization.
pub const NATIVE_MADCTL: u8 = 0xC8;

/// Positive gamma correction curve
pub const GAMMA_POSITIVE_TABLE: [u8; 16] = [
    0x09, 0x16, 0x09, 0x20, 0x21, 0x1B, 0x13, 0x19, 0x17, 0x15, 0x1E, 0x2B, 0x04, 0x05, 0x02,
    0x0E,
];

/// Negative gamma correction curve
pub const GAMMA_NEGATIVE_TABLE: [u8; 16] = [
    0x0B, 0x14, 0x08, 0x1E, 0x22, 0x1D, 0x18, 0x1E, 0x1B, 0x1A, 0x24, 0x2B, 0x06, 0x06, 0x02,
    0x0F,
];

/// Ordered register writes run by [`Display::initialize`](crate::Display::initialize)
///
/// The address presets use the controller's native portrait addressing
/// (128 columns by 160 rows), since rotation is not applied yet.
pub static INIT_SEQUENCE: [InitCommand; 16] = [
    InitCommand::new(SOFT_RESET, &[], 50),
    InitCommand::new(SLEEP_OUT, &[], 500),
    InitCommand::new(FRAME_RATE_CONTROL, &[0x0B, 0x14], 0),
    // GVDD 4.7V
    InitCommand::new(POWER_CONTROL_1, &[0x08, 0x00], 0),
    InitCommand::new(POWER_CONTROL_2, &[0x05], 0),
    InitCommand::new(PUMP_FREQUENCY, &[0x1B], 0),
    InitCommand::new(COLOR_MODE, &[COLOR_MODE_16BIT], 100),
    InitCommand::new(COLUMN_ADDRESS_SET, &[0x00, 0x00, 0x00, 0x7F], 0),
    InitCommand::new(ROW_ADDRESS_SET, &[0x00, 0x00, 0x00, 0x9F], 0),
    InitCommand::new(MEMORY_ACCESS_CONTROL, &[NATIVE_MADCTL], 0),
    InitCommand::new(SOURCE_OUTPUT_DIRECTION, &[0x00], 0),
    InitCommand::new(GAMMA_ENABLE, &[0x00], 0),
    InitCommand::new(GAMMA_POSITIVE, &GAMMA_POSITIVE_TABLE, 50),
    InitCommand::new(GAMMA_NEGATIVE, &GAMMA_NEGATIVE_TABLE, 50),
    InitCommand::new(NORMAL_MODE_ON, &[], 10),
    InitCommand::new(DISPLAY_ON, &[], 500),
];

/// Sum of all settle delays in [`INIT_SEQUENCE`], in milliseconds
pub fn total_delay_ms() -> u32 {
    INIT_SEQUENCE.iter().map(|step| step.delay_ms).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_with_reset_and_wake() {
        assert_eq!(INIT_SEQUENCE[0].command, SOFT_RESET);
        assert_eq!(INIT_SEQUENCE[1].command, SLEEP_OUT);
        assert_eq!(INIT_SEQUENCE[1].delay_ms, 500);
    }

    #[test]
    fn test_sequence_ends_with_display_on() {
        let last = INIT_SEQUENCE[INIT_SEQUENCE.len() - 1];
        assert_eq!(last, InitCommand::new(DISPLAY_ON, &[], 500));
    }

    #[test]
    fn test_sequence_matches_register_table() {
        let expected: [(u8, &[u8], u32); 16] = [
            (0x01, &[], 50),
            (0x11, &[], 500),
            (0xB1, &[0x0B, 0x14], 0),
            (0xC0, &[0x08, 0x00], 0),
            (0xC1, &[0x05], 0),
            (0xEC, &[0x1B], 0),
            (0x3A, &[0x55], 100),
            (0x2A, &[0x00, 0x00, 0x00, 0x7F], 0),
            (0x2B, &[0x00, 0x00, 0x00, 0x9F], 0),
            (0x36, &[0xC8], 0),
            (0xB7, &[0x00], 0),
            (0xF2, &[0x00], 0),
            (
                0xE0,
                &[
                    0x09, 0x16, 0x09, 0x20, 0x21, 0x1B, 0x13, 0x19, 0x17, 0x15, 0x1E, 0x2B, 0x04,
                    0x05, 0x02, 0x0E,
                ],
                50,
            ),
            (
                0xE1,
                &[
                    0x0B, 0x14, 0x08, 0x1E, 0x22, 0x1D, 0x18, 0x1E, 0x1B, 0x1A, 0x24, 0x2B, 0x06,
                    0x06, 0x02, 0x0F,
                ],
                50,
            ),
            (0x13, &[], 10),
            (0x29, &[], 500),
        ];
        assert_eq!(INIT_SEQUENCE.len(), expected.len());
        for (i, (step, (command, params, delay_ms))) in
            INIT_SEQUENCE.iter().zip(expected).enumerate()
        {
            assert_eq!(step.command, command, "command at entry {i}");
            assert_eq!(step.params, params, "params at entry {i}");
            assert_eq!(step.delay_ms, delay_ms, "delay at entry {i}");
        }
    }

    #[test]
    fn test_total_delay_exceeds_one_second() {
        assert_eq!(total_delay_ms(), 1260);
        assert!(total_delay_ms() > 1000);
    }

    #[test]
    fn test_gamma_tables_are_sixteen_bytes() {
        let gamma: alloc::vec::Vec<_> = INIT_SEQUENCE
            .iter()
            .filter(|step| step.command == GAMMA_POSITIVE || step.command == GAMMA_NEGATIVE)
            .collect();
        assert_eq!(gamma.len(), 2);
        assert!(gamma.iter().all(|step| step.params.len() == 16));
    }

    #[test]
    fn test_madctl_written_once_with_native_order() {
        let madctl: alloc::vec::Vec<_> = INIT_SEQUENCE
            .iter()
            .filter(|step| step.command == MEMORY_ACCESS_CONTROL)
            .collect();
        assert_eq!(madctl.len(), 1);
        assert_eq!(madctl[0].params, &[NATIVE_MADCTL]);
    }
}
