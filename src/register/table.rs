use super::*;

/// Every register in the order it is printed.
pub static REGISTERS: [Register; 18] = [
    Register::word("manufacturer access word", MANUFACTURER_ACCESS, format::raw),
    Register::word("battery temperature", TEMPERATURE, format::temperature),
    Register::word("voltage (V)", VOLTAGE, format::volts),
    Register::word("design voltage (V)", DESIGN_VOLTAGE, format::volts),
    // Signed in the SBS document, printed as the raw unsigned word.
    Register::word("current flow (mA)", CURRENT, format::raw),
    Register::word("remaining capacity", REMAINING_CAPACITY, format::raw),
    Register::word("full charge capacity", FULL_CHARGE_CAPACITY, format::raw),
    Register::word("design capacity", DESIGN_CAPACITY, format::raw),
    Register::word("relative charge", RELATIVE_STATE_OF_CHARGE, format::raw),
    Register::word("absolute charge", ABSOLUTE_STATE_OF_CHARGE, format::raw),
    Register::word("battery status", BATTERY_STATUS, format::hex).then_blank_line(),
    Register::word("charging current", CHARGING_CURRENT, format::raw),
    Register::word("charging voltage", CHARGING_VOLTAGE, format::raw).then_blank_line(),
    Register::word("cycle count", CYCLE_COUNT, format::raw),
    Register::word("manufacture date", MANUFACTURE_DATE, format::date),
    Register::text("manufacturer name", MANUFACTURER_NAME),
    Register::text("device name", DEVICE_NAME),
    Register::text("device chemistry", DEVICE_CHEMISTRY),
];

#[test]
fn test_addresses_are_unique() {
    let mut addresses: Vec<u8> = REGISTERS.iter().map(|r| r.address).collect();
    addresses.sort_unstable();
    addresses.dedup();
    assert_eq!(addresses.len(), REGISTERS.len());
}

#[test]
fn test_separators_follow_status_and_charging_voltage() {
    let separated: Vec<u8> = REGISTERS
        .iter()
        .filter(|r| r.separator)
        .map(|r| r.address)
        .collect();
    assert_eq!(separated, vec![BATTERY_STATUS, CHARGING_VOLTAGE]);
}

#[test]
fn test_only_name_registers_are_text() {
    let text: Vec<u8> = REGISTERS
        .iter()
        .filter(|r| matches!(r.kind, super::Kind::Text))
        .map(|r| r.address)
        .collect();
    assert_eq!(text, vec![MANUFACTURER_NAME, DEVICE_NAME, DEVICE_CHEMISTRY]);
}
