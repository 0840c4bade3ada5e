use proptest::prelude::*;

use super::model::{Action, CellKind, Entry, SparseTable};
use super::raw::RawTableData;
use super::test_utils::{rule, sample_tables, two_cell_tables};

#[test]
fn decode_action_cells() {
    assert_eq!(Action::decode(0, CellKind::Action), Action::Shift(0));
    assert_eq!(Action::decode(5, CellKind::Action), Action::Shift(5));
    assert_eq!(Action::decode(-1, CellKind::Action), Action::Reduce(0));
    assert_eq!(Action::decode(-3, CellKind::Action), Action::Reduce(2));
    assert_eq!(
        Action::decode(i16::MIN, CellKind::Action),
        Action::Reduce(i16::MAX as u16)
    );
}

#[test]
fn decode_goto_cells() {
    let kind = CellKind::Goto { accept: -5 };
    assert_eq!(Action::decode(-5, kind), Action::Accept);
    assert_eq!(Action::decode(4, kind), Action::Goto(4));
    assert_eq!(Action::decode(-4, kind), Action::Goto(-4));
}

#[test]
fn accept_marker_out_of_short_range_never_matches() {
    let kind = CellKind::Goto { accept: !70000 };
    assert_eq!(Action::decode(i16::MIN, kind), Action::Goto(i16::MIN));
}

#[test]
fn display() {
    assert_eq!(Action::Shift(5).to_string(), "SHIFT 5");
    assert_eq!(Action::Reduce(2).to_string(), "REDUCE 2");
    assert_eq!(Action::Goto(3).to_string(), "GOTO 3");
    assert_eq!(Action::Accept.to_string(), "ACCEPT");
    assert_eq!(Action::Absent.to_string(), "");
}

#[test]
fn two_cell_scenario() {
    let table = SparseTable::new(two_cell_tables());

    assert_eq!(table.action(0, 0), Action::Shift(5));
    assert_eq!(table.action(0, 1), Action::Reduce(2));
    // Index 2 is past the end of the cell array.
    assert_eq!(table.action(0, 2), Action::Absent);
    assert_eq!(table.action_cell(0, 2), None);
}

#[test]
fn sample_actions() {
    let table = SparseTable::new(sample_tables());

    assert_eq!(table.action(0, 0), Action::Shift(2));
    assert_eq!(table.action(0, 1), Action::Shift(1));
    assert_eq!(table.action(0, 2), Action::Reduce(0));

    // Negative offset: only terminal 2 lands inside the array.
    assert_eq!(table.action(1, 0), Action::Absent);
    assert_eq!(table.action(1, 1), Action::Absent);
    assert_eq!(table.action(1, 2), Action::Reduce(1));
    assert_eq!(table.action_cell(1, 2), Some(0));

    // Cells claimed by other rows are absent.
    assert_eq!(table.action(2, 0), Action::Shift(3));
    assert_eq!(table.action(2, 1), Action::Absent);
    assert_eq!(table.action(3, 0), Action::Absent);
    assert_eq!(table.action(3, 1), Action::Reduce(3));
    assert_eq!(table.action(3, 2), Action::Absent);

    // Shared offset reads the same cells.
    for terminal in 0..3 {
        assert_eq!(table.action(4, terminal), table.action(0, terminal));
    }
}

#[test]
fn sample_gotos() {
    let table = SparseTable::new(sample_tables());

    assert_eq!(table.goto(0, 0), Action::Accept);
    assert_eq!(table.goto(0, 1), Action::Goto(3));
    assert_eq!(table.goto_cell(0, 0), Some(4));
    assert_eq!(table.goto_cell(0, 1), Some(5));

    assert_eq!(table.goto(2, 0), Action::Goto(4));
    assert_eq!(table.goto(2, 1), Action::Absent);

    // Unused goto offset.
    assert_eq!(table.goto(1, 0), Action::Absent);
    assert_eq!(table.goto_offset(1), None);
}

#[test]
fn goto_tags_are_nonterminal_ids() {
    // Goto window of state 0 starts at cell 1; cell 1 is tagged with terminal 0,
    // so it is never read as a goto even though 0 == index.
    let mut raw = sample_tables();
    raw.goto_offsets[0] = -2;
    let table = SparseTable::new(raw);

    assert_eq!(table.goto_cell(0, 0), None);
    assert_eq!(table.goto_cell(0, 1), None);
}

#[test]
fn unused_offset_has_no_entries() {
    let mut raw = two_cell_tables();
    raw.action_offsets[0] = RawTableData::UNUSED_OFFSET;
    let table = SparseTable::new(raw);

    assert_eq!(table.action_offset(0), None);
    assert_eq!(table.action(0, 0), Action::Absent);
    assert_eq!(table.actions_of(0).count(), 0);
}

#[test]
fn state_out_of_range_is_absent() {
    let table = SparseTable::new(sample_tables());
    assert_eq!(table.action(99, 0), Action::Absent);
    assert_eq!(table.goto(99, 0), Action::Absent);
}

#[test]
fn entries_of_state() {
    let table = SparseTable::new(sample_tables());

    let actions: Vec<Entry> = table.actions_of(0).collect();
    assert_eq!(
        actions,
        vec![
            Entry {
                symbol: 0,
                cell: 1,
                action: Action::Shift(2)
            },
            Entry {
                symbol: 1,
                cell: 2,
                action: Action::Shift(1)
            },
            Entry {
                symbol: 2,
                cell: 3,
                action: Action::Reduce(0)
            },
        ]
    );

    let gotos: Vec<Entry> = table.gotos_of(0).collect();
    assert_eq!(
        gotos,
        vec![
            Entry {
                symbol: 3,
                cell: 4,
                action: Action::Accept
            },
            Entry {
                symbol: 4,
                cell: 5,
                action: Action::Goto(3)
            },
        ]
    );
}

#[test]
fn model_reports_shape() {
    let table = SparseTable::from(sample_tables());
    assert_eq!(table.num_states(), 5);
    assert_eq!(table.table_size(), 9);
    assert_eq!(table.symbols().num_terminals, 3);
    assert_eq!(table.raw().error_symbol_id, 2);
}

fn arb_offset() -> impl Strategy<Value = i32> {
    prop_oneof![
        4 => -8i32..32,
        1 => Just(RawTableData::UNUSED_OFFSET),
    ]
}

fn arb_tables() -> impl Strategy<Value = RawTableData> {
    (1usize..24, 1usize..6).prop_flat_map(|(cells, states)| {
        (
            prop::collection::vec(any::<i16>(), cells),
            prop::collection::vec(-2i16..10, cells),
            prop::collection::vec(arb_offset(), states),
            prop::collection::vec(arb_offset(), states),
            prop::collection::vec((4u16..8, 0u16..4), 1..6),
        )
            .prop_map(|(actions, lookaheads, action_offsets, goto_offsets, rules)| {
                RawTableData {
                    actions,
                    lookaheads,
                    action_offsets,
                    goto_offsets,
                    default_actions: None,
                    rule_info: rules.into_iter().map(|(nt, len)| rule(nt, len)).collect(),
                    error_symbol_id: 0,
                }
            })
    })
}

proptest! {
    #[test]
    fn action_lookup_is_total_and_consistent(raw in arb_tables()) {
        let table = SparseTable::new(raw.clone());
        for state in 0..table.num_states() {
            let offset = raw.action_offsets[state];
            for terminal in 0..table.symbols().num_terminals {
                let action = table.action(state, terminal);
                let index = i64::from(offset) + terminal as i64;
                let live = offset != RawTableData::UNUSED_OFFSET
                    && index >= 0
                    && (index as usize) < raw.actions.len()
                    && i64::from(raw.lookaheads[index as usize]) == terminal as i64;
                if live {
                    let v = raw.actions[index as usize];
                    let expected = if v >= 0 {
                        Action::Shift(v as u16)
                    } else {
                        Action::Reduce((-(v as i32) - 1) as u16)
                    };
                    prop_assert_eq!(action, expected);
                } else {
                    prop_assert_eq!(action, Action::Absent);
                }
            }
        }
    }

    #[test]
    fn goto_lookup_never_yields_shift_or_reduce(raw in arb_tables()) {
        let table = SparseTable::new(raw);
        for state in 0..table.num_states() {
            for index in 0..table.symbols().num_nonterminals {
                let is_goto_like = matches!(
                    table.goto(state, index),
                    Action::Absent | Action::Goto(_) | Action::Accept
                );
                prop_assert!(is_goto_like);
            }
        }
    }
}
