// CP乘数表模块
// 开发心理：等级→乘数是整个推断模型的地基，必须与官方公开表逐位一致
// 设计原则：整数等级为锚点，半级取相邻两锚点的算术平均，绝不外推

/// 支持的最低等级。
pub const MIN_LEVEL: f64 = 1.0;

/// 搜索使用的等级上限（XL糖上限）。
/// 51号锚点只用于构造50.5的中点，不参与搜索。
pub const MAX_LEVEL: f64 = 50.0;

/// 表内最高的整数锚点等级。
const MAX_ANCHOR_LEVEL: u32 = 51;

// 整数等级1..=51的CP乘数，来自公开的标准乘数表。
// 下标0对应等级1。乘数随等级单调非减。
const CPM_BASE: [f64; 51] = [
    0.094,      // 1
    0.16639787, // 2
    0.21573247, // 3
    0.25572005, // 4
    0.29024988, // 5
    0.3210876,  // 6
    0.34921268, // 7
    0.3752356,  // 8
    0.39956728, // 9
    0.4225,     // 10
    0.44310755, // 11
    0.4627984,  // 12
    0.48168495, // 13
    0.49985844, // 14
    0.51739395, // 15
    0.5343543,  // 16
    0.5507927,  // 17
    0.5667545,  // 18
    0.5822789,  // 19
    0.5974,     // 20
    0.6121573,  // 21
    0.6265671,  // 22
    0.64065295, // 23
    0.65443563, // 24
    0.667934,   // 25
    0.6811649,  // 26
    0.69414365, // 27
    0.7068842,  // 28
    0.7193991,  // 29
    0.7317,     // 30
    0.7377695,  // 31
    0.74378943, // 32
    0.74976104, // 33
    0.7556855,  // 34
    0.76156384, // 35
    0.76739717, // 36
    0.7731865,  // 37
    0.77893275, // 38
    0.784637,   // 39
    0.7903,     // 40
    0.7953,     // 41
    0.8003,     // 42
    0.8053,     // 43
    0.8103,     // 44
    0.8153,     // 45
    0.8203,     // 46
    0.8253,     // 47
    0.8303,     // 48
    0.8353,     // 49
    0.8403,     // 50
    0.8453,     // 51，仅用于计算50.5
];

// 整数锚点查表，越界返回None
fn anchor(level: u32) -> Option<f64> {
    if (1..=MAX_ANCHOR_LEVEL).contains(&level) {
        Some(CPM_BASE[(level - 1) as usize])
    } else {
        None
    }
}

/// 查询任意半级粒度等级的CP乘数。
///
/// 整数等级直接查锚点；半级取上下两个整数锚点的算术平均。
/// 等级先对齐到0.5网格，网格外（低于1或高于最大锚点）返回`None`。
pub fn multiplier_at(level: f64) -> Option<f64> {
    if !level.is_finite() {
        return None;
    }

    let doubled = (level * 2.0).round();
    if doubled < 2.0 || doubled > (MAX_ANCHOR_LEVEL * 2) as f64 {
        return None;
    }

    let doubled = doubled as u32;
    if doubled % 2 == 0 {
        // 整数等级
        anchor(doubled / 2)
    } else {
        // 半级：相邻锚点平均
        let lower = anchor(doubled / 2)?;
        let upper = anchor(doubled / 2 + 1)?;
        Some((lower + upper) / 2.0)
    }
}

/// 迭代[min, max]区间内所有半级等级，裁剪到[`MIN_LEVEL`, `MAX_LEVEL`]。
/// min > max时产生空序列。
pub fn half_levels(min: f64, max: f64) -> impl Iterator<Item = f64> {
    let lo = ((min.max(MIN_LEVEL) * 2.0).round() as u32).max((MIN_LEVEL * 2.0) as u32);
    let hi = ((max.min(MAX_LEVEL).max(0.0) * 2.0).round() as u32).min((MAX_LEVEL * 2.0) as u32);
    (lo..=hi).map(|doubled| doubled as f64 / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_anchor_lookup() {
        assert_eq!(multiplier_at(1.0), Some(0.094));
        assert_eq!(multiplier_at(10.0), Some(0.4225));
        assert_eq!(multiplier_at(40.0), Some(0.7903));
        assert_eq!(multiplier_at(50.0), Some(0.8403));
    }

    #[test]
    fn test_half_level_is_mean_of_neighbours() {
        // 25.5 = (25与26锚点的平均)
        assert_eq!(multiplier_at(25.5), Some((0.667934 + 0.6811649) / 2.0));
        assert_eq!(multiplier_at(1.5), Some((0.094 + 0.16639787) / 2.0));
        assert_eq!(multiplier_at(50.5), Some((0.8403 + 0.8453) / 2.0));
    }

    #[test]
    fn test_all_half_levels_covered() {
        // 1.0到50.0之间每个半级都必须有值，且单调非减
        let mut previous = 0.0;
        for doubled in 2..=100 {
            let level = doubled as f64 / 2.0;
            let m = multiplier_at(level).unwrap();
            assert!(m > 0.0);
            assert!(m >= previous, "乘数在等级{}处回落", level);
            previous = m;
        }
    }

    #[test]
    fn test_out_of_range_yields_none() {
        assert_eq!(multiplier_at(0.5), None);
        assert_eq!(multiplier_at(0.0), None);
        assert_eq!(multiplier_at(-3.0), None);
        assert_eq!(multiplier_at(51.5), None);
        assert_eq!(multiplier_at(f64::NAN), None);
        assert_eq!(multiplier_at(f64::INFINITY), None);
    }

    #[test]
    fn test_half_levels_iteration() {
        let levels: Vec<f64> = half_levels(29.0, 30.5).collect();
        assert_eq!(levels, vec![29.0, 29.5, 30.0, 30.5]);
    }

    #[test]
    fn test_half_levels_clamping() {
        // 上限裁剪到50.0
        let levels: Vec<f64> = half_levels(49.0, 60.0).collect();
        assert_eq!(*levels.last().unwrap(), 50.0);
        // 下限裁剪到1.0
        let levels: Vec<f64> = half_levels(-5.0, 1.5).collect();
        assert_eq!(levels, vec![1.0, 1.5]);
    }

    #[test]
    fn test_half_levels_empty_when_inverted() {
        assert_eq!(half_levels(30.0, 29.0).count(), 0);
    }
}
