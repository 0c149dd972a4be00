use std::collections::HashMap;
use std::fmt;

use super::error::{AutomatonError, InvalidStateIdError};

pub type StateId = usize;

/// 自动机状态
///
/// 转移表是部分函数：缺失的符号表示“此状态下无转移”
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub is_accepting: bool,
    transitions: HashMap<char, StateId>,
}

impl State {
    pub fn new(is_accepting: bool) -> Self {
        Self {
            is_accepting,
            transitions: HashMap::new(),
        }
    }

    /// 读入 `symbol` 后的目标状态
    pub fn next(&self, symbol: char) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

/// 确定性有限自动机
///
/// 状态 0 为初始状态。匹配不修改自动机本身，多个调用方可以共享同一实例。
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
}

impl Automaton {
    /// 创建空自动机（没有状态时任何输入都匹配为空）
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// 添加新状态，返回新状态ID；第一个添加的状态即初始状态
    pub fn add_state(&mut self, is_accepting: bool) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(is_accepting));
        id
    }

    /// 添加状态转移规则
    pub fn add_transition(
        &mut self,
        from: StateId,
        symbol: char,
        to: StateId,
    ) -> Result<(), AutomatonError> {
        let state_count = self.states.len();
        if to >= state_count {
            return Err(AutomatonError::InvalidToStateId(InvalidStateIdError {
                state_id: to,
                state_count,
            }));
        }
        let Some(state) = self.states.get_mut(from) else {
            return Err(AutomatonError::InvalidFromStateId(InvalidStateIdError {
                state_id: from,
                state_count,
            }));
        };
        state.transitions.insert(symbol, to);
        Ok(())
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// 从 `start` 开始的最长接受前缀
    ///
    /// 从状态 0 出发逐字符转移，遇到未定义的转移或输入结束即停止。
    /// 每进入一次接受状态就记录当前长度；由于长度单调递增，最后一次记录即最长匹配。
    /// 没有回溯：非接受的死路只会留下上一个接受检查点（或空匹配）。
    pub fn longest_match<'i>(&self, input: &'i [char], start: usize) -> &'i [char] {
        let Some(rest) = input.get(start..) else {
            return &[];
        };

        let mut current: StateId = 0;
        let mut longest = 0;
        for (consumed, &symbol) in rest.iter().enumerate() {
            let Some(next) = self.states.get(current).and_then(|s| s.next(symbol)) else {
                break;
            };
            current = next;
            if self.states[current].is_accepting {
                longest = consumed + 1;
            }
        }
        &rest[..longest]
    }

    /// 最长匹配的字符数，0 表示不匹配
    pub fn match_len(&self, input: &[char], start: usize) -> usize {
        self.longest_match(input, start).len()
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("state_count", &self.states.len())
            .field(
                "accepting",
                &self
                    .states
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.is_accepting)
                    .map(|(id, _)| id)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
