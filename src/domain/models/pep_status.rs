// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::{BTreeSet, HashMap};

use crate::domain::models::result_table::ResultTable;

/// 期望状态映射
///
/// 汇总表中的缩写状态码 → 与之一致的完整状态集合。运行期间只读。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatusMap {
    entries: HashMap<String, BTreeSet<String>>,
}

impl ExpectedStatusMap {
    pub fn new<I, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, statuses)| {
                    (code.into(), statuses.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }

    /// PEP 0 索引使用的状态码
    pub fn pep_defaults() -> Self {
        Self::new([
            ("A", vec!["Active", "Accepted"]),
            ("D", vec!["Deferred"]),
            ("F", vec!["Final"]),
            ("P", vec!["Provisional"]),
            ("R", vec!["Rejected"]),
            ("S", vec!["Superseded"]),
            ("W", vec!["Withdrawn"]),
            ("", vec!["Draft", "Active"]),
        ])
    }

    pub fn expected_for(&self, code: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(code)
    }
}

impl Default for ExpectedStatusMap {
    fn default() -> Self {
        Self::pep_defaults()
    }
}

/// 汇总表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub declared_status_code: String,
    pub detail_link: String,
}

/// 状态不一致记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub link: String,
    pub expected: BTreeSet<String>,
    pub actual: String,
}

/// 状态统计
///
/// 不变式：`counts` 之和 == `total` == 已处理行数。
/// 计数按状态首次出现的顺序保存。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    mismatches: Vec<Mismatch>,
    total: usize,
}

impl StatusTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一行的权威状态
    pub fn record(&mut self, status: &str) {
        match self.index.get(status) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(status.to_string(), self.counts.len());
                self.counts.push((status.to_string(), 1));
            }
        }
        self.total += 1;
    }

    pub fn record_mismatch(&mut self, mismatch: Mismatch) {
        self.mismatches.push(mismatch);
    }

    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 生成结果表：每个状态一行，最后是 `Total`
    pub fn to_table(&self) -> ResultTable {
        let mut table = ResultTable::new(["Status", "Amount"]);
        for (status, count) in &self.counts {
            table.push([status.clone(), count.to_string()]);
        }
        table.push(["Total".to_string(), self.total.to_string()]);
        table
    }
}
