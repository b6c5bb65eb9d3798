use crate::domain::model::Numeral;
use crate::utils::error::{CensusError, Result};
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

const SUCCESSOR_OPEN: &str = "Suc(";
const ZERO_LITERAL: &str = "Zero";

#[allow(clippy::should_implement_trait)]
impl Numeral {
    /// `add(Zero, b) = b`，`add(Suc(p), b) = Suc(add(p, b))`。
    ///
    /// 每剝掉 `self` 的一層 successor，就在 `other` 外面包一層；
    /// 以迴圈累積取代遞迴，結果與遞迴定義相同。
    pub fn add(&self, other: &Numeral) -> Numeral {
        wrap_successors(other.clone(), self.magnitude())
    }

    /// `multiply(Zero, b) = Zero`，`multiply(Suc(p), b) = add(b, multiply(p, b))`
    pub fn multiply(&self, other: &Numeral) -> Numeral {
        let layers = other.magnitude();
        let mut product = Numeral::Zero;
        let mut remaining = self;
        while let Numeral::Successor(predecessor) = remaining {
            // add(b, product)：在 product 外包上 b 層
            product = wrap_successors(product, layers);
            remaining = &**predecessor;
        }
        product
    }

    /// `Zero` 或 `Suc(...)`，巢狀深度等於數值大小
    pub fn render(&self) -> String {
        let depth = self.magnitude() as usize;
        let mut out = String::with_capacity(depth * (SUCCESSOR_OPEN.len() + 1) + ZERO_LITERAL.len());
        for _ in 0..depth {
            out.push_str(SUCCESSOR_OPEN);
        }
        out.push_str(ZERO_LITERAL);
        for _ in 0..depth {
            out.push(')');
        }
        out
    }
}

fn wrap_successors(mut base: Numeral, layers: u64) -> Numeral {
    for _ in 0..layers {
        base = Numeral::succ(base);
    }
    base
}

/// 解析十進位數字或 `render` 的輸出，只回傳大小，不建構 numeral。
pub fn parse_magnitude(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let invalid = |reason: &str| CensusError::ParseNumeralError {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("input is empty"));
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed
            .parse::<u64>()
            .map_err(|e| invalid(&format!("decimal out of range: {}", e)));
    }

    let mut rest = trimmed;
    let mut depth: u64 = 0;
    while let Some(inner) = rest.strip_prefix(SUCCESSOR_OPEN) {
        depth += 1;
        rest = inner;
    }

    let closing = rest
        .strip_prefix(ZERO_LITERAL)
        .ok_or_else(|| invalid("expected 'Zero' inside the innermost 'Suc('"))?;

    if closing.len() as u64 != depth || !closing.bytes().all(|b| b == b')') {
        return Err(invalid("unbalanced parentheses"));
    }

    Ok(depth)
}

impl FromStr for Numeral {
    type Err = CensusError;

    fn from_str(s: &str) -> Result<Self> {
        parse_magnitude(s).map(Numeral::from_magnitude)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// 只為參照實作運算子，owned 值上的 `.add(&x)` 仍解析到固有方法
impl Add<&Numeral> for &Numeral {
    type Output = Numeral;

    fn add(self, rhs: &Numeral) -> Numeral {
        Numeral::add(self, rhs)
    }
}

impl Mul<&Numeral> for &Numeral {
    type Output = Numeral;

    fn mul(self, rhs: &Numeral) -> Numeral {
        self.multiply(rhs)
    }
}
