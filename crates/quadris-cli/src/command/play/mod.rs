use quadris_engine::GameState;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the shape sequence (drawn from the OS when omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Do not draw the landing preview
    #[clap(long, default_value_t = false)]
    hide_ghost: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed, hide_ghost } = arg;

    let game = match seed {
        Some(seed) => GameState::with_seed(*seed),
        None => GameState::new(),
    };
    let mut app = PlayApp::new(game, !hide_ghost);

    Tui::new().run(&mut app)
}
