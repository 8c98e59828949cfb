//! An in-memory SMBus that answers from a fixed register script and records
//! every transaction it is asked to perform.

#![allow(dead_code)]
use std::collections::HashMap;
use std::collections::HashSet;

use sbsread::register::*;
use sbsread::Smbus;
use sbsread::SmbusError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    ReadWord(u8),
    ReadByte(u8),
    ReadBlock(u8, u8),
    WriteWord(u8, u16),
}

#[derive(Debug, Default)]
pub struct ScriptedBus {
    words: HashMap<u8, u16>,
    blocks: HashMap<u8, Vec<u8>>,
    failing: HashSet<u8>,
    pub transactions: Vec<Transaction>,
}

impl ScriptedBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(mut self, register: u8, value: u16) -> Self {
        self.words.insert(register, value);
        self
    }

    /// A well formed string register: length byte then characters.
    pub fn string(self, register: u8, text: &str) -> Self {
        let mut block = vec![text.len() as u8];
        block.extend_from_slice(text.as_bytes());
        self.block(register, block)
    }

    /// Raw block contents, including the length byte.
    pub fn block(mut self, register: u8, block: Vec<u8>) -> Self {
        self.blocks.insert(register, block);
        self
    }

    /// Every transaction against `register` fails.
    pub fn fail(mut self, register: u8) -> Self {
        self.failing.insert(register);
        self
    }

    fn check(&self, register: u8) -> Result<(), SmbusError> {
        if self.failing.contains(&register) {
            return Err(SmbusError::TransportFailure(format!(
                "no acknowledgment for register 0x{register:02x}"
            )));
        }
        Ok(())
    }

    fn missing(register: u8) -> SmbusError {
        SmbusError::TransportFailure(format!("register 0x{register:02x} not scripted"))
    }
}

impl Smbus for ScriptedBus {
    fn read_word(&mut self, register: u8) -> Result<u16, SmbusError> {
        self.transactions.push(Transaction::ReadWord(register));
        self.check(register)?;
        self.words
            .get(&register)
            .copied()
            .ok_or_else(|| Self::missing(register))
    }

    fn read_byte(&mut self, register: u8) -> Result<u8, SmbusError> {
        self.transactions.push(Transaction::ReadByte(register));
        self.check(register)?;
        self.blocks
            .get(&register)
            .and_then(|block| block.first())
            .copied()
            .ok_or_else(|| Self::missing(register))
    }

    fn read_block(&mut self, register: u8, len: u8) -> Result<Vec<u8>, SmbusError> {
        self.transactions.push(Transaction::ReadBlock(register, len));
        self.check(register)?;
        self.blocks
            .get(&register)
            .map(|block| block.iter().copied().take(len as usize).collect())
            .ok_or_else(|| Self::missing(register))
    }

    fn write_word(&mut self, register: u8, value: u16) -> Result<(), SmbusError> {
        self.transactions.push(Transaction::WriteWord(register, value));
        self.check(register)?;
        self.words.insert(register, value);
        Ok(())
    }
}

/// A healthy battery with every printed register scripted.
pub fn scripted_battery() -> ScriptedBus {
    ScriptedBus::new()
        .word(MANUFACTURER_ACCESS, 24576)
        .word(TEMPERATURE, 2982)
        .word(VOLTAGE, 16400)
        .word(DESIGN_VOLTAGE, 14400)
        .word(CURRENT, 65036)
        .word(REMAINING_CAPACITY, 3850)
        .word(FULL_CHARGE_CAPACITY, 4200)
        .word(DESIGN_CAPACITY, 4400)
        .word(RELATIVE_STATE_OF_CHARGE, 91)
        .word(ABSOLUTE_STATE_OF_CHARGE, 87)
        .word(BATTERY_STATUS, 0x00e0)
        .word(CHARGING_CURRENT, 2000)
        .word(CHARGING_VOLTAGE, 16800)
        .word(CYCLE_COUNT, 42)
        .word(MANUFACTURE_DATE, (21 << 9) | (6 << 5) | 15)
        .string(MANUFACTURER_NAME, "SMP")
        .string(DEVICE_NAME, "DELL 4M1JN")
        .string(DEVICE_CHEMISTRY, "LION")
}

pub const SCRIPTED_TRANSCRIPT: &str = "\
manufacturer access word: 24576
battery temperature: 25.20
voltage (V): 16.4
design voltage (V): 14.4
current flow (mA): 65036
remaining capacity: 3850
full charge capacity: 4200
design capacity: 4400
relative charge: 91
absolute charge: 87
battery status: 0xe0

charging current: 2000
charging voltage: 16800

cycle count: 42
manufacture date: 2001.6.15
manufacturer name: SMP
device name: DELL 4M1JN
device chemistry: LION
";
