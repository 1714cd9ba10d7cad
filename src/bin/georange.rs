use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use georange::{Database, FieldMask, Lookup};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "georange")]
#[command(
    about = "IP geolocation lookups from range-indexed binary databases",
    long_about = "georange - Fast read-only IP geolocation lookups\n\n\
    Query range-indexed binary database files for the geographic and network\n\
    attributes of IPv4 and IPv6 addresses. Databases are memory-mapped, so\n\
    queries start instantly and touch only the rows the search probes.\n\n\
    Examples:\n\
      georange query IP-COUNTRY.BIN 8.8.8.8\n\
      georange query IP-COUNTRY.BIN 2001:db8::1 --fields country_short,city\n\
      georange query IP-COUNTRY.BIN 8.8.8.8 --format json\n\
      georange inspect IP-COUNTRY.BIN"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up an address in a database
    Query {
        /// Path to the database (.BIN file)
        #[arg(value_name = "DATABASE")]
        database: PathBuf,

        /// IPv4 or IPv6 address to look up
        #[arg(value_name = "ADDRESS")]
        address: String,

        /// Comma-separated fields to populate: country_short, country_long,
        /// region, city, isp, latitude, longitude, domain, zipcode,
        /// timezone, netspeed, all (default: all)
        #[arg(long)]
        fields: Option<String>,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print database header metadata
    Inspect {
        /// Path to the database (.BIN file)
        #[arg(value_name = "DATABASE")]
        database: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            database,
            address,
            fields,
            format,
        } => cmd_query(&database, &address, fields.as_deref(), &format),
        Commands::Inspect { database } => cmd_inspect(&database),
    }
}

fn parse_fields(selectors: Option<&str>) -> Result<FieldMask> {
    let Some(selectors) = selectors else {
        return Ok(FieldMask::ALL);
    };
    let mut mask = FieldMask::empty();
    for name in selectors.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        mask |= FieldMask::from_name(name)
            .with_context(|| format!("Unknown field selector: {}", name))?;
    }
    Ok(mask)
}

fn cmd_query(database: &PathBuf, address: &str, fields: Option<&str>, format: &str) -> Result<()> {
    let mask = parse_fields(fields)?;
    let db = Database::open(database)
        .with_context(|| format!("Failed to open database {}", database.display()))?;

    let outcome = db.lookup(address, mask)?;

    match format {
        "json" => print_json(address, &outcome)?,
        "text" => print_text(address, &outcome),
        other => anyhow::bail!("Unknown output format: {} (expected text or json)", other),
    }

    // nonzero exit for misses so scripts can branch without parsing output
    match outcome {
        Lookup::Found(_) => Ok(()),
        Lookup::NotFound => std::process::exit(1),
        Lookup::InvalidAddress => std::process::exit(2),
    }
}

fn print_text(address: &str, outcome: &Lookup) {
    match outcome {
        Lookup::Found(record) => {
            println!("address:       {}", address);
            println!("country_short: {}", record.country_short);
            println!("country_long:  {}", record.country_long);
            println!("region:        {}", record.region);
            println!("city:          {}", record.city);
            println!("isp:           {}", record.isp);
            println!("latitude:      {}", record.latitude);
            println!("longitude:     {}", record.longitude);
            println!("domain:        {}", record.domain);
            println!("zipcode:       {}", record.zip_code);
            println!("timezone:      {}", record.time_zone);
            println!("netspeed:      {}", record.net_speed);
        }
        Lookup::NotFound => println!("{}: not found", address),
        Lookup::InvalidAddress => println!("{}: invalid address", address),
    }
}

fn print_json(address: &str, outcome: &Lookup) -> Result<()> {
    let value = match outcome {
        Lookup::Found(record) => serde_json::json!({
            "address": address,
            "outcome": "found",
            "record": record,
        }),
        Lookup::NotFound => serde_json::json!({
            "address": address,
            "outcome": "not_found",
        }),
        Lookup::InvalidAddress => serde_json::json!({
            "address": address,
            "outcome": "invalid_address",
        }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn cmd_inspect(database: &PathBuf) -> Result<()> {
    let db = Database::open(database)
        .with_context(|| format!("Failed to open database {}", database.display()))?;

    let header = db.header();
    let (year, month, day) = header.build_date();
    println!("file:         {}", database.display());
    println!("schema type:  {}", header.db_type);
    println!("columns:      {}", header.column_count);
    println!("build date:   {:04}-{:02}-{:02}", year, month, day);
    println!("records:      {}", header.record_count);
    println!("ip version:   {}", header.ip_version);
    Ok(())
}
