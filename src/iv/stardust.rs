// 星尘费用→等级区间模块
// 开发心理：费用档位和等级的耦合是官方手调的近似映射，不能用公式重新推导
// 设计原则：数据驱动，逐档照抄公开的强化费用表（含XL档），查不到就宽松回退

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::iv::cpm;

/// 一个星尘费用档位对应的等级区间（闭区间，半级粒度）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DustBand {
    pub cost: u32,
    pub level_min: f64,
    pub level_max: f64,
}

// 标准强化费用档位表。键是游戏内出现的精确费用值，不做插值。
// 10000档跨39..41是公开表本身的不规则处，保持原样。
const DUST_BANDS: &[DustBand] = &[
    DustBand { cost: 200, level_min: 1.0, level_max: 2.5 },
    DustBand { cost: 400, level_min: 3.0, level_max: 4.5 },
    DustBand { cost: 600, level_min: 5.0, level_max: 6.5 },
    DustBand { cost: 800, level_min: 7.0, level_max: 8.5 },
    DustBand { cost: 1000, level_min: 9.0, level_max: 10.5 },
    DustBand { cost: 1300, level_min: 11.0, level_max: 12.5 },
    DustBand { cost: 1600, level_min: 13.0, level_max: 14.5 },
    DustBand { cost: 1900, level_min: 15.0, level_max: 16.5 },
    DustBand { cost: 2200, level_min: 17.0, level_max: 18.5 },
    DustBand { cost: 2500, level_min: 19.0, level_max: 20.5 },
    DustBand { cost: 3000, level_min: 21.0, level_max: 22.5 },
    DustBand { cost: 3500, level_min: 23.0, level_max: 24.5 },
    DustBand { cost: 4000, level_min: 25.0, level_max: 26.5 },
    DustBand { cost: 4500, level_min: 27.0, level_max: 28.5 },
    DustBand { cost: 5000, level_min: 29.0, level_max: 30.5 },
    DustBand { cost: 6000, level_min: 31.0, level_max: 32.5 },
    DustBand { cost: 7000, level_min: 33.0, level_max: 34.5 },
    DustBand { cost: 8000, level_min: 35.0, level_max: 36.5 },
    DustBand { cost: 9000, level_min: 37.0, level_max: 38.5 },
    DustBand { cost: 10000, level_min: 39.0, level_max: 41.0 },
    DustBand { cost: 11000, level_min: 41.5, level_max: 42.5 },
    DustBand { cost: 12000, level_min: 43.0, level_max: 44.5 },
    DustBand { cost: 13000, level_min: 45.0, level_max: 46.5 },
    DustBand { cost: 14000, level_min: 47.0, level_max: 48.5 },
    DustBand { cost: 15000, level_min: 49.0, level_max: 50.0 },
];

// 全局费用索引
lazy_static! {
    static ref BAND_INDEX: HashMap<u32, &'static DustBand> = {
        let index: HashMap<u32, &'static DustBand> =
            DUST_BANDS.iter().map(|band| (band.cost, band)).collect();
        debug!("星尘费用表初始化完成，共{}个档位", index.len());
        index
    };
}

/// 按精确费用查档位。
pub fn band_for_cost(cost: u32) -> Option<&'static DustBand> {
    BAND_INDEX.get(&cost).copied()
}

/// 所有档位，按费用升序。
pub fn all_bands() -> &'static [DustBand] {
    DUST_BANDS
}

/// 把观测到的星尘费用解析为等级搜索区间。
///
/// 命中档位且`recent_band_only`为真：该次强化就发生在这个档位内，
/// 直接返回档位自身的区间。命中但非最近强化：只能确定上限，
/// 下限放宽到全局最低等级。未命中任何档位：宽松回退到全区间，
/// 搜索退化但不报错。
pub fn resolve_level_range(cost: u32, recent_band_only: bool) -> (f64, f64) {
    match band_for_cost(cost) {
        Some(band) if recent_band_only => (band.level_min, band.level_max),
        Some(band) => (cpm::MIN_LEVEL, band.level_max),
        None => (cpm::MIN_LEVEL, cpm::MAX_LEVEL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_band_recent() {
        assert_eq!(resolve_level_range(5000, true), (29.0, 30.5));
        assert_eq!(resolve_level_range(200, true), (1.0, 2.5));
        assert_eq!(resolve_level_range(15000, true), (49.0, 50.0));
    }

    #[test]
    fn test_known_band_not_recent_widens_lower_bound() {
        assert_eq!(resolve_level_range(5000, false), (1.0, 30.5));
        assert_eq!(resolve_level_range(15000, false), (1.0, 50.0));
    }

    #[test]
    fn test_unknown_cost_falls_back_to_full_range() {
        // 未知费用不报错，退化为全区间
        assert_eq!(resolve_level_range(1, false), (1.0, 50.0));
        assert_eq!(resolve_level_range(1, true), (1.0, 50.0));
        assert_eq!(resolve_level_range(999, true), (1.0, 50.0));
    }

    #[test]
    fn test_irregular_10000_band_preserved() {
        assert_eq!(resolve_level_range(10000, true), (39.0, 41.0));
    }

    #[test]
    fn test_band_table_invariants() {
        let mut previous_cost = 0;
        for band in all_bands() {
            assert!(band.cost > previous_cost, "费用档位必须严格升序");
            assert!(band.level_min <= band.level_max);
            assert!(band.level_min >= cpm::MIN_LEVEL);
            assert!(band.level_max <= cpm::MAX_LEVEL);
            previous_cost = band.cost;
        }
    }

    #[test]
    fn test_band_lookup() {
        assert!(band_for_cost(2500).is_some());
        assert!(band_for_cost(2501).is_none());
    }
}
