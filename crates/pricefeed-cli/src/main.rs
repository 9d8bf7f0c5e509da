//! 가격 피드 분석 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 일별 가격 피드의 구간별 변화율
//! pricefeed changes -i data/nyc.csv
//!
//! # 월별 지수, 지정일 이후 변화 포함
//! pricefeed changes -i data/cs10.csv --value-column index -q M --since 2024-03-15
//!
//! # 52주 범위 통계
//! pricefeed stats -i data/nyc.csv --format table
//!
//! # 시장 이름 → 티커
//! pricefeed ticker "New York City"
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use pricefeed_cli::commands::changes::{run_changes, ChangesConfig};
use pricefeed_cli::commands::output::OutputFormat;
use pricefeed_cli::commands::segments::{run_segments, SegmentsConfig};
use pricefeed_cli::commands::stats::{run_stats, StatsConfig};
use pricefeed_cli::commands::ticker::{format_name, NameStyle};
use pricefeed_cli::commands::{parse_date, SeriesInput};
use pricefeed_core::{init_logging, AppConfig, LogFormat, PricefeedError, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "pricefeed")]
#[command(about = "Real-estate price feed change statistics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 설정 파일 경로 (지정하지 않으면 config/default.toml, 없으면 기본값 사용)
    #[arg(long, global = true)]
    config: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

/// 시계열 입력 공통 인자.
#[derive(Args, Debug, Clone)]
struct SeriesArgs {
    /// 입력 CSV 파일
    #[arg(short, long)]
    input: PathBuf,

    /// 날짜 컬럼 이름 (기본: 설정값)
    #[arg(long)]
    date_column: Option<String>,

    /// 값 컬럼 이름 (기본: 설정값)
    #[arg(long)]
    value_column: Option<String>,

    /// 샘플링 빈도 (D: 일별, M: 월별)
    #[arg(short = 'q', long)]
    frequency: Option<String>,

    /// 출력 파일 경로 (지정하지 않으면 stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// 구간별 변화율, 고점 대비 현재, 지정일 이후 변화 계산
    Changes {
        #[command(flatten)]
        series: SeriesArgs,

        /// 변화 기준일 (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// 52주 최고/최저 및 전년 대비 변화
    Stats {
        #[command(flatten)]
        series: SeriesArgs,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 차트용 중앙값 기준 구간 분할 (JSON)
    Segments {
        #[command(flatten)]
        series: SeriesArgs,
    },

    /// 시장 이름 변환
    Ticker {
        /// 시장 이름 (예: "New York City")
        name: String,

        /// 변환 방식 (ticker, display, case-shiller)
        #[arg(short, long, default_value = "ticker")]
        style: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => AppConfig::load_default()?,
    };

    let mut log_config = app_config.logging.to_log_config();
    if let Some(level) = cli.log_level {
        log_config.level = level;
    }
    if let Some(format) = cli.log_format {
        log_config.format = format.parse::<LogFormat>().map_err(|e| anyhow!(e))?;
    }
    init_logging(log_config).map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    info!(
        config = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH),
        "Configuration loaded"
    );

    let analysis = &app_config.analysis;
    let resolve = |args: SeriesArgs| -> Result<(SeriesInput, Option<String>)> {
        let input = SeriesInput::resolve(
            args.input,
            args.date_column,
            args.value_column,
            args.frequency.as_deref(),
            analysis,
        )?;
        Ok((input, args.output))
    };

    let result = match cli.command {
        Commands::Changes {
            series,
            since,
            format,
        } => {
            let (input, output) = resolve(series)?;
            let since = since.as_deref().map(parse_date).transpose()?;
            let config = ChangesConfig {
                input,
                since,
                format: OutputFormat::parse(&format)?,
                output,
            };
            run_changes(config).map(|_| ())
        }

        Commands::Stats { series, format } => {
            let (input, output) = resolve(series)?;
            let config = StatsConfig {
                input,
                format: OutputFormat::parse(&format)?,
                output,
            };
            run_stats(config).map(|_| ())
        }

        Commands::Segments { series } => {
            let (input, output) = resolve(series)?;
            run_segments(SegmentsConfig { input, output }).map(|_| ())
        }

        Commands::Ticker { name, style } => {
            let style = NameStyle::parse(&style)?;
            println!("{}", format_name(&name, style));
            Ok(())
        }
    };

    if let Err(e) = &result {
        match e.downcast_ref::<PricefeedError>() {
            Some(err) if err.is_input_error() => error!("Invalid input data: {:#}", e),
            _ => error!("Command failed: {:#}", e),
        }
    }

    result
}
