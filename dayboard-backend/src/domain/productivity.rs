// src/domain/productivity.rs

//! 進捗率と1日の生産性スコアの計算
//!
//! どちらも整数演算で四捨五入（0.5 は切り上げ）する。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 生産性ラベルの閾値
pub const PRODUCTIVE_THRESHOLD: i32 = 80;
pub const MODERATELY_PRODUCTIVE_THRESHOLD: i32 = 50;

/// 1日の生産性ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductivityLabel {
    #[serde(rename = "Not Productive")]
    #[default]
    NotProductive,
    #[serde(rename = "Moderately Productive")]
    ModeratelyProductive,
    #[serde(rename = "Productive")]
    Productive,
}

impl ProductivityLabel {
    /// スコアからラベルを決定
    pub fn from_score(score: i32) -> Self {
        if score >= PRODUCTIVE_THRESHOLD {
            Self::Productive
        } else if score >= MODERATELY_PRODUCTIVE_THRESHOLD {
            Self::ModeratelyProductive
        } else {
            Self::NotProductive
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Not Productive" => Some(Self::NotProductive),
            "Moderately Productive" => Some(Self::ModeratelyProductive),
            "Productive" => Some(Self::Productive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotProductive => "Not Productive",
            Self::ModeratelyProductive => "Moderately Productive",
            Self::Productive => "Productive",
        }
    }
}

impl fmt::Display for ProductivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// round(100 * numerator / denominator)。denominator が 0 以下なら 0
pub fn rounded_percentage(numerator: i32, denominator: i32) -> i32 {
    if denominator <= 0 || numerator <= 0 {
        return 0;
    }
    let numerator = i64::from(numerator);
    let denominator = i64::from(denominator);
    // (200n + d) / 2d == floor(100n/d + 0.5)
    ((200 * numerator + denominator) / (2 * denominator)) as i32
}

/// タスク単位の進捗率
pub fn completion_percentage(completed_items: i32, total_items: i32) -> i32 {
    rounded_percentage(completed_items, total_items).min(100)
}

/// end-day 時点のタスク集計結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductivityScore {
    pub total_tasks: i32,
    pub completed_tasks: i32,
    pub overall_productivity: i32,
    pub label: ProductivityLabel,
}

impl ProductivityScore {
    /// 各タスクの進捗率から集計（100% のタスクを完了とみなす）
    pub fn from_task_percentages<I>(percentages: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let (total_tasks, completed_tasks) =
            percentages
                .into_iter()
                .fold((0, 0), |(total, completed), percentage| {
                    let done = if percentage >= 100 { 1 } else { 0 };
                    (total + 1, completed + done)
                });

        Self::from_counts(total_tasks, completed_tasks)
    }

    pub fn from_counts(total_tasks: i32, completed_tasks: i32) -> Self {
        let overall_productivity = rounded_percentage(completed_tasks, total_tasks);

        Self {
            total_tasks,
            completed_tasks,
            overall_productivity,
            label: ProductivityLabel::from_score(overall_productivity),
        }
    }
}
