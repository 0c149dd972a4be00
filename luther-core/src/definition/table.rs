use crate::alphabet::Alphabet;
use crate::automaton::{Automaton, AutomatonError};

use super::error::{TableError, TableErrorKind};

/// 转移表中 “无转移” 的标记
const NO_TRANSITION: &str = "E";

/// 解析后的一行（一个状态）
struct Row {
    line: usize,
    accepting: bool,
    targets: Vec<Option<usize>>,
}

/// 把转移表文本解析为自动机
///
/// 第 i 列对应字母表第 i 个符号；空行被跳过。
pub fn parse_table(text: &str, alphabet: &Alphabet) -> Result<Automaton, TableError> {
    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_row(line, index + 1, alphabet.len()))
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(TableError {
            line: 1,
            kind: TableErrorKind::Empty,
        });
    }

    let mut automaton = Automaton::new();
    for row in &rows {
        automaton.add_state(row.accepting);
    }
    for (from, row) in rows.iter().enumerate() {
        for (symbol, target) in alphabet.iter().zip(&row.targets) {
            let Some(to) = *target else {
                continue;
            };
            automaton
                .add_transition(from, symbol, to)
                .map_err(|e| match e {
                    AutomatonError::InvalidToStateId(invalid)
                    | AutomatonError::InvalidFromStateId(invalid) => TableError {
                        line: row.line,
                        kind: TableErrorKind::TargetOutOfRange {
                            target: invalid.state_id,
                            state_count: invalid.state_count,
                        },
                    },
                })?;
        }
    }
    Ok(automaton)
}

fn parse_row(line: &str, line_number: usize, symbol_count: usize) -> Result<Row, TableError> {
    let error = |kind| TableError {
        line: line_number,
        kind,
    };
    let fields: Vec<&str> = line.split_whitespace().collect();

    let accepting = match fields[0] {
        "+" => true,
        "-" => false,
        other => return Err(error(TableErrorKind::BadMarker(other.to_string()))),
    };

    // fields[1] 是状态编号，仅供阅读，不参与解析
    let transitions = fields.get(2..).unwrap_or_default();
    if transitions.len() != symbol_count {
        return Err(error(TableErrorKind::ColumnCount {
            expected: symbol_count,
            found: transitions.len(),
        }));
    }

    let targets = transitions
        .iter()
        .map(|field| match *field {
            NO_TRANSITION => Ok(None),
            index => index
                .parse::<usize>()
                .map(Some)
                .map_err(|_| error(TableErrorKind::BadTarget(index.to_string()))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Row {
        line: line_number,
        accepting,
        targets,
    })
}
