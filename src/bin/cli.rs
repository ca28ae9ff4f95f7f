//! MazeGraph CLI 工具
//!
//! 从 CSV 边表计算最小生成树 / 最短路径，或生成并求解迷宫

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use mazegraph::{
    top_k_sort, Edge, Graph, KruskalMazeCarver, Maze, MazeConfig, WeightedEdge,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mazegraph-cli")]
#[command(about = "MazeGraph 命令行工具", version)]
struct Args {
    /// 日志级别（覆盖 RUST_LOG）
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 计算最小生成树
    Mst {
        /// 边表 CSV（列: from,to,weight）
        #[arg(short, long)]
        edges: PathBuf,
    },

    /// 计算两点间最短路径
    Path {
        /// 边表 CSV（列: from,to,weight）
        #[arg(short, long)]
        edges: PathBuf,

        /// 起点
        #[arg(long)]
        from: String,

        /// 终点
        #[arg(long)]
        to: String,
    },

    /// 选出最大的 k 个整数（升序输出）
    Topk {
        /// 保留个数
        #[arg(short, long, allow_hyphen_values = true)]
        k: i64,

        /// 输入整数
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// 生成迷宫
    Maze {
        /// JSON 配置文件
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// 列数
        #[arg(short = 'W', long)]
        width: Option<usize>,

        /// 行数
        #[arg(short = 'H', long)]
        height: Option<usize>,

        /// 随机种子
        #[arg(short, long)]
        seed: Option<u64>,

        /// 标出左上角到右下角的路径
        #[arg(long)]
        solve: bool,
    },
}

/// CSV 边记录
#[derive(Debug, Clone, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    weight: f64,
}

/// 路径 / 生成树输出
#[derive(Debug, Serialize)]
struct EdgeListOutput {
    edges: Vec<WeightedEdge<String>>,
    total_weight: f64,
}

impl EdgeListOutput {
    fn new(edges: Vec<WeightedEdge<String>>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight()).sum();
        Self {
            edges,
            total_weight,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    match args.command {
        Command::Mst { edges } => {
            let graph = load_graph(&edges)?;
            let tree = graph.minimum_spanning_tree()?;
            print_json(&EdgeListOutput::new(tree))?;
        }

        Command::Path { edges, from, to } => {
            let graph = load_graph(&edges)?;
            let path = graph.shortest_path(&from, &to)?;
            print_json(&EdgeListOutput::new(path))?;
        }

        Command::Topk { k, values } => {
            let top = top_k_sort(k, values)?;
            print_json(&top)?;
        }

        Command::Maze {
            config,
            width,
            height,
            seed,
            solve,
        } => {
            let config = build_maze_config(config.as_deref(), width, height, seed)?;
            run_maze(&config, solve)?;
        }
    }

    Ok(())
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// 读取 CSV 边表
fn read_edges(path: &Path) -> anyhow::Result<Vec<EdgeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("无法打开边表 {}", path.display()))?;

    let mut records = Vec::new();
    for (line, record) in reader.deserialize::<EdgeRecord>().enumerate() {
        let record = record.with_context(|| format!("边表第 {} 行解析失败", line + 2))?;
        records.push(record);
    }
    Ok(records)
}

/// 由边表构建图，顶点取边表中出现过的全部端点
fn load_graph(path: &Path) -> anyhow::Result<Graph<String, WeightedEdge<String>>> {
    let records = read_edges(path)?;
    let vertices: Vec<String> = records
        .iter()
        .flat_map(|r| [r.from.clone(), r.to.clone()])
        .collect();
    let edges = records
        .into_iter()
        .map(|r| WeightedEdge::new(r.from, r.to, r.weight));

    let graph = Graph::new(vertices, edges)?;
    tracing::info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "边表已加载"
    );
    Ok(graph)
}

/// 配置文件为基础，命令行参数覆盖
fn build_maze_config(
    path: Option<&Path>,
    width: Option<usize>,
    height: Option<usize>,
    seed: Option<u64>,
) -> anyhow::Result<MazeConfig> {
    let mut config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取配置 {}", path.display()))?;
            MazeConfig::from_json(&json)?
        }
        None => MazeConfig::default(),
    };

    if let Some(width) = width {
        config.width = width;
    }
    if let Some(height) = height {
        config.height = height;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    config.validate()?;
    Ok(config)
}

fn run_maze(config: &MazeConfig, solve: bool) -> anyhow::Result<()> {
    let maze = Maze::grid(config.width, config.height)?;
    let removed = KruskalMazeCarver::from_config(config).walls_to_remove(&maze)?;

    let path = if solve {
        let last = maze.rooms().len() - 1;
        match maze.solve(&removed, 0, last) {
            Ok(path) => path,
            // 单个房间没有可走的边
            Err(_) if last == 0 => vec![0],
            Err(e) => bail!("迷宫求解失败: {}", e),
        }
    } else {
        Vec::new()
    };

    println!("{}", maze.summary(&removed));
    println!("{}", maze.render(&removed, &path));
    if solve {
        println!("路径长度: {} 步", path.len().saturating_sub(1));
    }
    Ok(())
}
