use ecgscope::config::EcgScopeConfig;

fn main() -> eframe::Result<()> {
    env_logger::init();
    ecgscope::run_app(EcgScopeConfig::default())
}
