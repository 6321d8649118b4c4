// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html};

use crate::domain::models::element_query::{ElementQuery, Matcher};
use crate::utils::errors::ParserError;

/// 查找范围
///
/// 对整个文档查找时包含根元素本身；对元素查找时只看其后代。
#[derive(Clone, Copy)]
pub struct SearchScope<'a> {
    root: ElementRef<'a>,
    include_root: bool,
}

impl<'a> From<&'a Html> for SearchScope<'a> {
    fn from(doc: &'a Html) -> Self {
        Self {
            root: doc.root_element(),
            include_root: true,
        }
    }
}

impl<'a> From<ElementRef<'a>> for SearchScope<'a> {
    fn from(root: ElementRef<'a>) -> Self {
        Self {
            root,
            include_root: false,
        }
    }
}

fn collect_matches<'a>(
    scope: SearchScope<'a>,
    query: &ElementQuery,
    first_only: bool,
) -> Vec<ElementRef<'a>> {
    let mut found = Vec::new();
    let skip = usize::from(!scope.include_root);

    // descendants() walks in document order, i.e. depth-first pre-order
    for node in scope.root.descendants().skip(skip) {
        let candidate = match &query.matcher {
            Matcher::Tag(name) => {
                ElementRef::wrap(node).filter(|el| el.value().name() == name.as_str())
            }
            Matcher::Text(text) => {
                let is_match = node
                    .value()
                    .as_text()
                    .is_some_and(|t| &**t == text.as_str());
                if is_match {
                    node.parent().and_then(ElementRef::wrap)
                } else {
                    None
                }
            }
        };

        if let Some(el) = candidate.filter(|el| query.attrs_match(|name| el.value().attr(name)))
        {
            found.push(el);
            if first_only {
                break;
            }
        }
    }

    found
}

/// 定位必需元素
///
/// 返回文档顺序中的第一个匹配；文本模式返回匹配文本节点的父元素。
///
/// # 错误
///
/// 没有匹配时立即返回 `ParserError::ElementNotFound`，携带原始查询
pub fn locate<'a>(
    scope: impl Into<SearchScope<'a>>,
    query: &ElementQuery,
) -> Result<ElementRef<'a>, ParserError> {
    collect_matches(scope.into(), query, true)
        .into_iter()
        .next()
        .ok_or_else(|| ParserError::not_found(query))
}

/// 按文档顺序返回全部匹配，允许为空
pub fn locate_all<'a>(scope: impl Into<SearchScope<'a>>, query: &ElementQuery) -> Vec<ElementRef<'a>> {
    collect_matches(scope.into(), query, false)
}

/// 定位紧随其后的第一个同名兄弟元素
pub fn next_sibling_element<'a>(
    element: ElementRef<'a>,
    tag: &str,
) -> Result<ElementRef<'a>, ParserError> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == tag)
        .ok_or_else(|| ParserError::not_found(&ElementQuery::tag(tag)))
}

/// 读取必需属性
pub fn attr_of<'a>(element: ElementRef<'a>, name: &str) -> Result<&'a str, ParserError> {
    element.value().attr(name).ok_or_else(|| {
        ParserError::not_found(&ElementQuery::tag(element.value().name()).with_present(name))
    })
}

/// 元素及其全部后代的文本
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
