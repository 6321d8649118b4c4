// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use regex::Regex;

/// 元素匹配方式
#[derive(Debug, Clone)]
pub enum Matcher {
    /// 按标签名匹配
    Tag(String),
    /// 文本模式：按文本节点的完整内容匹配，返回其父元素
    Text(String),
}

/// 属性值匹配方式
#[derive(Debug, Clone)]
pub enum AttrMatch {
    /// 精确匹配。对 `class` 属性，整串相等或任一类名相等均视为匹配
    Exact(String),
    /// 正则匹配整个属性值
    Pattern(Regex),
    /// 属性存在即可
    Present,
}

impl AttrMatch {
    pub fn matches(&self, name: &str, value: &str) -> bool {
        match self {
            AttrMatch::Exact(expected) if name == "class" => {
                let normalized = value.split_whitespace().collect::<Vec<_>>().join(" ");
                normalized == *expected || value.split_whitespace().any(|c| c == expected)
            }
            AttrMatch::Exact(expected) => value == expected,
            AttrMatch::Pattern(re) => re.is_match(value),
            AttrMatch::Present => true,
        }
    }
}

/// 元素查询条件
///
/// 纯值对象：标签名（或文本）加上属性过滤器
#[derive(Debug, Clone)]
pub struct ElementQuery {
    pub matcher: Matcher,
    pub attrs: Vec<(String, AttrMatch)>,
}

impl ElementQuery {
    pub fn tag(name: &str) -> Self {
        Self {
            matcher: Matcher::Tag(name.to_string()),
            attrs: Vec::new(),
        }
    }

    pub fn text(text: &str) -> Self {
        Self {
            matcher: Matcher::Text(text.to_string()),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs
            .push((name.to_string(), AttrMatch::Exact(value.to_string())));
        self
    }

    pub fn with_pattern(mut self, name: &str, pattern: Regex) -> Self {
        self.attrs.push((name.to_string(), AttrMatch::Pattern(pattern)));
        self
    }

    pub fn with_present(mut self, name: &str) -> Self {
        self.attrs.push((name.to_string(), AttrMatch::Present));
        self
    }

    /// 检查元素属性是否满足全部过滤条件
    pub fn attrs_match<'a>(&self, mut lookup: impl FnMut(&str) -> Option<&'a str>) -> bool {
        self.attrs.iter().all(|(name, matcher)| {
            lookup(name).is_some_and(|value| matcher.matches(name, value))
        })
    }
}

impl fmt::Display for ElementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.matcher {
            Matcher::Tag(name) => write!(f, "{name}")?,
            Matcher::Text(text) => write!(f, "text {text:?}")?,
        }
        for (name, matcher) in &self.attrs {
            match matcher {
                AttrMatch::Exact(value) => write!(f, "[{name}=\"{value}\"]")?,
                AttrMatch::Pattern(re) => write!(f, "[{name}~=/{}/]", re.as_str())?,
                AttrMatch::Present => write!(f, "[{name}]")?,
            }
        }
        Ok(())
    }
}
