// 品质评级与汇总模块
// 开发心理：把IV总和翻译成玩家能读懂的评级和汇总，展示层只管渲染
// 设计原则：纯函数，阈值照抄线上文案

use serde::{Deserialize, Serialize};

use crate::iv::engine::{MatchedSpread, IV_TOTAL_MAX};

/// 品质百分比的粗评级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Great,
    Good,
    Okay,
    Poor,
}

impl Rating {
    /// 阈值：≥90 Great，≥75 Good，≥60 Okay，其余 Poor。
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Rating::Great
        } else if percent >= 75.0 {
            Rating::Good
        } else if percent >= 60.0 {
            Rating::Okay
        } else {
            Rating::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Great => "Great",
            Rating::Good => "Good",
            Rating::Okay => "Okay",
            Rating::Poor => "Poor",
        }
    }
}

/// 已知IV总和的品质百分比，保留一位小数。
pub fn quality_percent(total: u8) -> f64 {
    let raw = total as f64 / IV_TOTAL_MAX as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// 品质百分比的描述性文案（原始百分比，不做四舍五入）。
pub fn rating_label(percent: f64) -> &'static str {
    if percent == 100.0 {
        "Perfect IV (100%)"
    } else if percent >= 97.8 {
        "Near perfect (98-99%)"
    } else if percent >= 82.2 {
        "Strong IVs (82-97%)"
    } else if percent >= 66.7 {
        "Decent IVs (67-81%)"
    } else {
        "Below average IVs (<67%)"
    }
}

/// 一次查询结果的汇总视图。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub matches: usize,
    pub best: MatchedSpread,
    pub worst: MatchedSpread,
    pub percent_min: f64,
    pub percent_max: f64,
    pub average_percent: f64,
    pub rating: Rating,
}

impl Summary {
    /// 由已排序的结果切片构建；空结果没有汇总。
    pub fn from_spreads(spreads: &[MatchedSpread]) -> Option<Self> {
        let best = *spreads.first()?;
        let worst = *spreads.last()?;
        let average_percent =
            spreads.iter().map(|s| s.percent).sum::<f64>() / spreads.len() as f64;
        Some(Summary {
            matches: spreads.len(),
            best,
            worst,
            percent_min: worst.percent,
            percent_max: best.percent,
            average_percent,
            rating: Rating::from_percent(average_percent),
        })
    }
}
