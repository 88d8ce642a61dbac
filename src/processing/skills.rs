//! Skills section parsing into labelled categories

use crate::processing::text_processor::strip_bullet;
use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const DEFAULT_SKILL_CATEGORY: &str = "Technical Skills";

/// Skill lists keyed by category label, in first-insertion order.
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCategoryMap {
    categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillCategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for `name`, appending an empty one if it does not exist yet
    pub fn bucket_mut(&mut self, name: &str) -> &mut Vec<String> {
        let index = match self.categories.iter().position(|category| category.name == name) {
            Some(index) => index,
            None => {
                self.categories.push(SkillCategory {
                    name: name.to_string(),
                    skills: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        &mut self.categories[index].skills
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| category.skills.as_slice())
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|category| category.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillCategory> {
        self.categories.iter()
    }

    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|category| category.skills.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for SkillCategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

struct SkillCategoryMapVisitor;

impl<'de> Visitor<'de> for SkillCategoryMapVisitor {
    type Value = SkillCategoryMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of skill category names to skill lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut categories = SkillCategoryMap::new();
        while let Some((name, skills)) = access.next_entry::<String, Vec<String>>()? {
            categories.bucket_mut(&name).extend(skills);
        }
        Ok(categories)
    }
}

impl<'de> Deserialize<'de> for SkillCategoryMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SkillCategoryMapVisitor)
    }
}

/// Fold state for the skills pass
struct SkillsState {
    current_category: String,
    categories: SkillCategoryMap,
}

impl SkillsState {
    fn new(start_category: &str) -> Self {
        Self {
            current_category: start_category.to_string(),
            categories: SkillCategoryMap::new(),
        }
    }

    fn step(mut self, line: &str) -> Self {
        if let Some(label) = line.strip_suffix(':') {
            self.current_category = label.trim().to_string();
            self.categories.bucket_mut(&self.current_category);
            return self;
        }

        let items: Vec<String> = strip_bullet(line)
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        if !items.is_empty() {
            self.categories.bucket_mut(&self.current_category).extend(items);
        }
        self
    }
}

pub struct SkillsParser {
    fallback_split_regex: Regex,
}

impl Default for SkillsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillsParser {
    pub fn new() -> Self {
        let fallback_split_regex = Regex::new(r"[\n,•\-\*]+").expect("Invalid skills split regex");
        Self { fallback_split_regex }
    }

    pub fn parse(&self, text: &str) -> SkillCategoryMap {
        let categories = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .fold(SkillsState::new(DEFAULT_SKILL_CATEGORY), SkillsState::step)
            .categories;

        if categories.is_empty() && !text.trim().is_empty() {
            return self.parse_flat(text);
        }
        categories
    }

    /// Treat the whole section as one flat list under the default category
    fn parse_flat(&self, text: &str) -> SkillCategoryMap {
        let skills: Vec<String> = self
            .fallback_split_regex
            .split(text)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        let mut categories = SkillCategoryMap::new();
        if !skills.is_empty() {
            categories.bucket_mut(DEFAULT_SKILL_CATEGORY).extend(skills);
        }
        categories
    }
}
