// IV推断器命令行入口
// 开发心理：CLI只是内核外面的一层薄壳——解析参数、校验观测、打印结果
// 所有推断语义都在库里，这里不写任何业务逻辑

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::{error, warn};

use pokemongo_iv::iv::rating::{rating_label, Summary};
use pokemongo_iv::{
    enumerate_and_rank, pokemon, AppraisalBucket, EncounterSource, IvError, Observation,
    ScannerConfig,
};

/// 宝可梦GO IV推断器：由CP/HP/星尘费用反推可能的个体值组合
#[derive(Debug, Parser)]
#[command(name = "pokemongo-iv", version, about)]
struct Cli {
    /// 宝可梦名称（不区分大小写）
    #[arg(short, long)]
    pokemon: String,

    /// 观测到的CP
    #[arg(long)]
    cp: u32,

    /// 观测到的HP
    #[arg(long)]
    hp: u32,

    /// 下一次强化的星尘费用
    #[arg(long)]
    stardust: u32,

    /// 最近刚强化过（把搜索收窄到费用档位自身的等级区间）
    #[arg(long)]
    recent: bool,

    /// 攻击轴的队长评估（best/good/fair/poor）
    #[arg(long)]
    atk: Option<String>,

    /// 防御轴的队长评估（best/good/fair/poor）
    #[arg(long)]
    def: Option<String>,

    /// 耐力轴的队长评估（best/good/fair/poor）
    #[arg(long)]
    sta: Option<String>,

    /// 获取来源（wild/wild_boosted/raid_research/egg/trade/lucky）
    #[arg(long)]
    source: Option<String>,

    /// 以JSON输出结果
    #[arg(long)]
    json: bool,

    /// 配置文件路径（TOML）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 结果表展示行数上限，覆盖配置
    #[arg(long)]
    limit: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("推断失败: {e:#}");
        process::exit(1);
    }
}

// 提示键解析失败不是硬错误：未识别的键等价于无约束，但提醒用户
fn parse_bucket(axis: &str, key: Option<&str>) -> Option<AppraisalBucket> {
    let key = key?;
    let bucket = AppraisalBucket::from_key(key);
    if bucket.is_none() {
        warn!("未识别的{}评估等级: {}，按无约束处理", axis, key);
    }
    bucket
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScannerConfig::load_from_file(path)
            .with_context(|| format!("加载配置文件{}失败", path.display()))?,
        None => ScannerConfig::default(),
    };

    let species = pokemon::find_by_name(&cli.pokemon)
        .ok_or_else(|| IvError::SpeciesNotFound(cli.pokemon.clone()))?;

    let mut observation = Observation::new(cli.cp, cli.hp, cli.stardust);
    observation.recent_band_only = cli.recent;
    observation.appraisal.attack = parse_bucket("攻击", cli.atk.as_deref());
    observation.appraisal.defense = parse_bucket("防御", cli.def.as_deref());
    observation.appraisal.stamina = parse_bucket("耐力", cli.sta.as_deref());

    if let Some(key) = cli.source.as_deref() {
        observation.source = EncounterSource::from_key(key);
        if observation.source.is_none() {
            warn!("未识别的获取来源: {}，按无约束处理", key);
        }
    }

    observation.validate()?;

    let spreads = enumerate_and_rank(&species.base, &observation);

    if cli.json || config.json_output {
        println!("{}", serde_json::to_string_pretty(&spreads)?);
        return Ok(());
    }

    println!("{} ({}/{}/{})", species.name, species.base.attack, species.base.defense, species.base.stamina);

    let Some(summary) = Summary::from_spreads(&spreads) else {
        println!("没有任何IV组合能同时复现观测到的CP和HP");
        return Ok(());
    };

    println!(
        "{}组匹配，品质{:.1}%-{:.1}%，平均{:.1}% ({})",
        summary.matches,
        summary.percent_min,
        summary.percent_max,
        summary.average_percent,
        summary.rating.label(),
    );
    println!("最佳组合: {}", rating_label(summary.best.percent));
    println!();
    println!("{:>5}  {:>4}  {:>4}  {:>4}  {:>5}  {:>7}", "等级", "攻击", "防御", "耐力", "总和", "品质");

    let limit = cli.limit.unwrap_or(config.result_limit);
    for spread in spreads.iter().take(limit) {
        println!(
            "{:>5.1}  {:>4}  {:>4}  {:>4}  {:>5}  {:>6.1}%",
            spread.level,
            spread.iv_attack,
            spread.iv_defense,
            spread.iv_stamina,
            spread.total,
            spread.percent,
        );
    }
    if spreads.len() > limit {
        println!("... 其余{}组未展示", spreads.len() - limit);
    }

    Ok(())
}
