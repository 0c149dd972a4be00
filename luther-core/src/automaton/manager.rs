use super::machine::Automaton;

/// 一个词法类别：自动机 + 标识符 + 可选的固定文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClass {
    pub automaton: Automaton,
    pub identifier: String,
    /// 若存在，输出时替代匹配到的文本（关键字、标点等）
    pub literal: Option<String>,
}

impl TokenClass {
    pub fn new(automaton: Automaton, identifier: impl Into<String>) -> Self {
        Self {
            automaton,
            identifier: identifier.into(),
            literal: None,
        }
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }
}

/// 仲裁结果：获胜类别的下标（定义顺序）与匹配长度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch {
    pub index: usize,
    pub length: usize,
}

/// 按定义顺序给出的匹配长度中选出最佳匹配
///
/// 最长者胜；长度相同时定义更早者胜；长度为 0 的不参与。全部为 0 时返回 `None`。
pub fn select_best_match<I>(lengths: I) -> Option<BestMatch>
where
    I: IntoIterator<Item = usize>,
{
    lengths
        .into_iter()
        .enumerate()
        .filter(|&(_, length)| length > 0)
        .fold(None, |best, (index, length)| match best {
            Some(current) if current.length >= length => Some(current),
            _ => Some(BestMatch { index, length }),
        })
}

/// 按定义顺序管理全部词法类别
#[derive(Debug, Clone, Default)]
pub struct Manager {
    classes: Vec<TokenClass>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: TokenClass) {
        self.classes.push(class);
    }

    pub fn classes(&self) -> &[TokenClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TokenClass> {
        self.classes.get(index)
    }

    /// 在 `offset` 处运行所有自动机并仲裁
    ///
    /// 先收集全部结果再仲裁，执行顺序不影响平局规则。
    pub fn best_match(&self, input: &[char], offset: usize) -> Option<BestMatch> {
        let lengths: Vec<usize> = self
            .classes
            .iter()
            .map(|class| class.automaton.match_len(input, offset))
            .collect();
        select_best_match(lengths)
    }
}

impl FromIterator<TokenClass> for Manager {
    fn from_iter<T: IntoIterator<Item = TokenClass>>(iter: T) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}
