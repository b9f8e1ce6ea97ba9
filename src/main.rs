use clap::Parser;
use form_enhancer::config::Command;
use form_enhancer::utils::{logger, validation::Validate};
use form_enhancer::{
    CliConfig, EnhancerConfig, FieldTable, FormEnhancer, FormError, MemoryPage, PageFixture,
    PageSession,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置（沒有指定時用內建欄位表）
    let config = match &cli.config {
        Some(path) => load_config(path).unwrap_or_else(|e| exit_with(&e)),
        None => EnhancerConfig::default(),
    };

    match &cli.command {
        Command::Simulate { json_logs: true, .. } => logger::init_json_logger(config.log_directive()),
        _ => logger::init_cli_logger(cli.verbose, config.log_directive()),
    }

    tracing::debug!("CLI config: {:?}", cli);
    let table = config.field_table();

    match &cli.command {
        Command::Apply { field, value } => {
            let enhancer = FormEnhancer::new(table);
            let out = enhancer.apply(field, value).unwrap_or_else(|e| exit_with(&e));
            println!("{}", out);
        }
        Command::Fields { json } => print_fields(&table, *json),
        Command::Simulate { page, .. } => {
            tracing::info!("📁 Loading page fixture from: {}", page.display());
            let fixture = PageFixture::from_file(page)
                .and_then(|f| f.validate().map(|_| f))
                .unwrap_or_else(|e| exit_with(&e));

            let host = MemoryPage::from_fixture(&fixture);
            let session = PageSession::load(host, table, &fixture.submenus);
            let (report, _) = session.run(&fixture.events);

            let json = report.to_json_pretty().unwrap_or_else(|e| exit_with(&e));
            println!("{}", json);
        }
    }

    Ok(())
}

fn load_config(path: &std::path::Path) -> form_enhancer::Result<EnhancerConfig> {
    let config = EnhancerConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

fn print_fields(table: &FieldTable, json: bool) {
    if json {
        let json = table.to_json_pretty().unwrap_or_else(|e| exit_with(&e));
        println!("{}", json);
        return;
    }

    for rule in table.rules() {
        match rule.kind {
            form_enhancer::core::FieldKind::Digits { max_len: Some(max) } => {
                println!("{:<16} {} (max {})", rule.id, rule.kind.label(), max)
            }
            kind => println!("{:<16} {}", rule.id, kind.label()),
        }
    }
}

fn exit_with(e: &FormError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
