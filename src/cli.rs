use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::PlannerConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plans pickup and delivery trips for a vehicle fleet", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "data/sample_input.json", help = "Route request JSON file")]
    input: PathBuf,

    #[arg(short, long, default_value_t = false, help = "Assemble plans in parallel")]
    parallel: bool,

    #[arg(long, help = "Fail instead of enumerating more plans than this")]
    max_plans: Option<usize>,

    #[arg(long, default_value_t = false, help = "Pretty-print the JSON output")]
    pretty: bool,

    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::new(self.parallel, self.max_plans)
    }
}
