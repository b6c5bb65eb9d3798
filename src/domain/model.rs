use serde::{Deserialize, Serialize};
use std::fmt;

/// 一元 (Peano) 表示的非負整數：`Zero` 外面包幾層 `Successor` 就代表多少。
///
/// 建構後不可變。深度等於數值大小，所以 clone、比較、drop 都用迴圈走訪，
/// 不依賴遞迴（避免大數值把 stack 用完）。
pub enum Numeral {
    Zero,
    Successor(Box<Numeral>),
}

impl Numeral {
    pub fn zero() -> Self {
        Numeral::Zero
    }

    pub fn succ(predecessor: Numeral) -> Self {
        Numeral::Successor(Box::new(predecessor))
    }

    pub fn from_magnitude(magnitude: u64) -> Self {
        let mut numeral = Numeral::Zero;
        for _ in 0..magnitude {
            numeral = Numeral::succ(numeral);
        }
        numeral
    }

    /// 外層 `Successor` 的數量
    pub fn magnitude(&self) -> u64 {
        let mut count = 0;
        let mut current = self;
        while let Numeral::Successor(predecessor) = current {
            count += 1;
            current = &**predecessor;
        }
        count
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Numeral::Zero)
    }

    pub fn predecessor(&self) -> Option<&Numeral> {
        match self {
            Numeral::Zero => None,
            Numeral::Successor(predecessor) => Some(&**predecessor),
        }
    }
}

impl Default for Numeral {
    fn default() -> Self {
        Numeral::Zero
    }
}

impl From<u64> for Numeral {
    fn from(magnitude: u64) -> Self {
        Numeral::from_magnitude(magnitude)
    }
}

// 結構完全由大小決定，重建即等於深拷貝
impl Clone for Numeral {
    fn clone(&self) -> Self {
        Numeral::from_magnitude(self.magnitude())
    }
}

impl PartialEq for Numeral {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            match (left, right) {
                (Numeral::Zero, Numeral::Zero) => return true,
                (Numeral::Successor(l), Numeral::Successor(r)) => {
                    left = &**l;
                    right = &**r;
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Numeral {}

impl fmt::Debug for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Numeral").field(&self.magnitude()).finish()
    }
}

impl Drop for Numeral {
    fn drop(&mut self) {
        // 逐層摘下 predecessor，每個節點被釋放時內部已換成 Zero
        let mut next = match self {
            Numeral::Zero => return,
            Numeral::Successor(predecessor) => std::mem::replace(&mut **predecessor, Numeral::Zero),
        };
        while let Numeral::Successor(predecessor) = &mut next {
            let inner = std::mem::replace(&mut **predecessor, Numeral::Zero);
            next = inner;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// 依插入順序保存的人員名單，允許重名。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonAggregate {
    people: Vec<Person>,
}

impl PersonAggregate {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn push(&mut self, person: Person) {
        self.people.push(person);
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl FromIterator<Person> for PersonAggregate {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self {
            people: iter.into_iter().collect(),
        }
    }
}

impl Extend<Person> for PersonAggregate {
    fn extend<I: IntoIterator<Item = Person>>(&mut self, iter: I) {
        self.people.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PersonAggregate {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_counts_successors() {
        let three = Numeral::succ(Numeral::succ(Numeral::succ(Numeral::zero())));
        assert_eq!(three.magnitude(), 3);
        assert_eq!(Numeral::Zero.magnitude(), 0);
        assert_eq!(Numeral::from_magnitude(7).magnitude(), 7);
    }

    #[test]
    fn test_predecessor() {
        let two = Numeral::from(2);
        assert_eq!(two.predecessor(), Some(&Numeral::from(1)));
        assert!(Numeral::Zero.predecessor().is_none());
        assert!(two.predecessor().and_then(Numeral::predecessor).unwrap().is_zero());
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Numeral::from(4), Numeral::from(4));
        assert_ne!(Numeral::from(4), Numeral::from(5));
        assert_ne!(Numeral::Zero, Numeral::from(1));
    }

    #[test]
    fn test_deep_numeral_clone_compare_and_drop() {
        let deep = Numeral::from_magnitude(200_000);
        let copy = deep.clone();
        assert_eq!(deep, copy);
        assert_eq!(copy.magnitude(), 200_000);
        drop(deep);
        drop(copy);
    }

    #[test]
    fn test_aggregate_preserves_insertion_order() {
        let mut roster: PersonAggregate = vec![Person::new("Ana", 20)].into_iter().collect();
        roster.push(Person::new("Luis", 17));
        roster.extend([Person::new("Ana", 22)]);

        let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Luis", "Ana"]);
        assert!(!roster.is_empty());
        assert!(PersonAggregate::default().is_empty());
    }
}
