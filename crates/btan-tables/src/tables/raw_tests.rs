use super::raw::{RawTableData, RuleInfo, SymbolSpace};
use super::test_utils::{rule, sample_tables, two_cell_tables};

#[test]
fn rule_info_unpacks_high_and_low_halves() {
    assert_eq!(
        RuleInfo::unpack(rule(7, 3)),
        RuleInfo {
            nonterminal: 7,
            rhs_len: 3
        }
    );
}

#[test]
fn rule_info_is_unsigned() {
    // High bit set in both halves must not sign-extend.
    let info = RuleInfo::unpack(0x8001_FFFFu32 as i32);
    assert_eq!(info.nonterminal, 0x8001);
    assert_eq!(info.rhs_len, 0xFFFF);
}

#[test]
fn symbol_space_from_rules() {
    let t = sample_tables();
    assert_eq!(
        t.symbols(),
        SymbolSpace {
            num_terminals: 3,
            max_nonterminal_id: 4,
            num_nonterminals: 2,
        }
    );
}

#[test]
fn symbol_space_single_nonterminal() {
    let t = two_cell_tables();
    // Rules produce 2, 2 and 3.
    assert_eq!(t.symbols().num_terminals, 2);
    assert_eq!(t.symbols().max_nonterminal_id, 3);
    assert_eq!(t.symbols().num_nonterminals, 2);
}

#[test]
fn symbol_space_without_rules_is_empty() {
    let t = RawTableData::default();
    assert_eq!(t.symbols(), SymbolSpace::default());
}

#[test]
fn accept_marker_is_complement_of_rule_count() {
    let t = sample_tables();
    assert_eq!(t.num_rules(), 4);
    assert_eq!(t.accept_marker(), -5);
}

#[test]
fn rule_lookup() {
    let t = sample_tables();
    assert_eq!(t.rule(1).map(|r| r.rhs_len), Some(2));
    assert_eq!(t.rule(4), None);
    assert_eq!(t.rules().count(), 4);
}

#[test]
fn to_bytes_layout() {
    let t = two_cell_tables();
    let bytes = t.to_bytes();

    let mut expected = Vec::new();
    expected.extend_from_slice(&2i32.to_be_bytes());
    expected.extend_from_slice(&[0x00, 0x05, 0xFF, 0xFD]); // actions 5, -3
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // lookaheads 0, 1
    expected.extend_from_slice(&1i32.to_be_bytes());
    expected.extend_from_slice(&0i32.to_be_bytes());
    expected.extend_from_slice(&i32::MIN.to_be_bytes());
    expected.extend_from_slice(&0i32.to_be_bytes()); // no default actions
    expected.extend_from_slice(&3i32.to_be_bytes());
    expected.extend_from_slice(&[0x00, 0x02, 0x00, 0x01]);
    expected.extend_from_slice(&[0x00, 0x02, 0x00, 0x03]);
    expected.extend_from_slice(&[0x00, 0x03, 0x00, 0x00]);
    expected.extend_from_slice(&1i16.to_be_bytes());

    assert_eq!(bytes, expected);
}
