use crate::domain::model::{Person, PersonAggregate};
use std::collections::HashMap;

/// 預設成年門檻
pub const ADULT_AGE: u32 = 18;

impl PersonAggregate {
    pub fn count(&self) -> usize {
        self.people().len()
    }

    /// 年齡 >= 18 的人，保持原本順序
    pub fn adults(&self) -> Vec<&Person> {
        self.adults_at_least(ADULT_AGE)
    }

    pub fn adults_at_least(&self, minimum_age: u32) -> Vec<&Person> {
        self.iter().filter(|p| p.age >= minimum_age).collect()
    }

    pub fn adult_names(&self, minimum_age: u32) -> Vec<&str> {
        self.adults_at_least(minimum_age)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    /// 每個不同名字出現的次數，依第一次出現的順序排列
    pub fn name_frequencies(&self) -> Vec<(&str, usize)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut frequencies: Vec<(&str, usize)> = Vec::new();

        for person in self.iter() {
            let name = person.name.as_str();
            match index.get(name) {
                Some(&slot) => frequencies[slot].1 += 1,
                None => {
                    index.insert(name, frequencies.len());
                    frequencies.push((name, 1));
                }
            }
        }

        frequencies
    }

    /// 出現次數最多的名字。
    ///
    /// 平手時回傳插入順序中最先出現的那個名字，所以相同輸入永遠得到相同結果；
    /// 空名單回傳 `None`。
    pub fn most_common_name(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (name, count) in self.name_frequencies() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((name, count)),
            }
        }
        best.map(|(name, _)| name)
    }
}
