// 队长评估过滤模块
// 开发心理：评估语只给出粗粒度的IV区间提示，缺失或不认识的提示一律放行
// 设计原则：硬约束过滤器，三轴独立判定

use serde::{Deserialize, Serialize};

use crate::iv::model::IvTriple;

/// 评估等级对应的IV闭区间。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppraisalBucket {
    Best, // 13-15
    Good, // 8-12
    Fair, // 4-7
    Poor, // 0-3
}

impl AppraisalBucket {
    /// 区间端点（含两端）。
    pub fn iv_range(self) -> (u8, u8) {
        match self {
            AppraisalBucket::Best => (13, 15),
            AppraisalBucket::Good => (8, 12),
            AppraisalBucket::Fair => (4, 7),
            AppraisalBucket::Poor => (0, 3),
        }
    }

    /// 解析外部提示键。不认识的键返回`None`，即不施加约束。
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "best" => Some(AppraisalBucket::Best),
            "good" => Some(AppraisalBucket::Good),
            "fair" => Some(AppraisalBucket::Fair),
            "poor" => Some(AppraisalBucket::Poor),
            _ => None,
        }
    }

    pub fn admits(self, iv: u8) -> bool {
        let (min, max) = self.iv_range();
        iv >= min && iv <= max
    }
}

/// 单轴判定：无提示放行，有提示按区间判定。
pub fn admits(iv: u8, bucket: Option<AppraisalBucket>) -> bool {
    match bucket {
        Some(bucket) => bucket.admits(iv),
        None => true,
    }
}

/// 三个属性轴各自的可选评估提示。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppraisalFilter {
    pub attack: Option<AppraisalBucket>,
    pub defense: Option<AppraisalBucket>,
    pub stamina: Option<AppraisalBucket>,
}

impl AppraisalFilter {
    /// 候选必须三轴全部通过。
    pub fn admits_all(&self, ivs: IvTriple) -> bool {
        admits(ivs.attack, self.attack)
            && admits(ivs.defense, self.defense)
            && admits(ivs.stamina, self.stamina)
    }

    pub fn is_empty(&self) -> bool {
        self.attack.is_none() && self.defense.is_none() && self.stamina.is_none()
    }
}
