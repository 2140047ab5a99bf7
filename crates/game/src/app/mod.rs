mod bootstrap;
mod demo_level;
mod level_fixture;
mod loop_runner;
mod session;
mod trace_renderer;

pub(crate) use bootstrap::build_app;
pub(crate) use loop_runner::run;
