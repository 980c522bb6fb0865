//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::config::{HttpMethod, OutputConfig, ProxyConfig, TransportConfig};
use crate::error::{CurlError, Result};
use crate::exit_code::exit_code_for_error;
use crate::http::{RequestBuilder, Response};
use crate::output::OutputWriter;
use crate::utils::StringUtils;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Main entry point for the CLI application
pub fn run() {
    let matches = create_app().get_matches();
    crate::logging::init(matches.get_flag("verbose"));

    if let Err(e) = run_with_args(&matches) {
        eprintln!("tinycurl: error: {}", e);
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Run tinycurl with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<()> {
    let request = build_request_from_args(matches)?;
    let mut builder = RequestBuilder::with_config(request.config);

    builder
        .set_url(&request.url)?
        .follow_redirects(request.follow_redirects)
        .capture_response(request.capture_response);

    let response = match request.method {
        HttpMethod::Get => builder.get()?,
        HttpMethod::Post => builder.post(request.fields)?,
    };

    if let Response::Body(body) = response {
        OutputWriter::new(OutputConfig::default()).write(body.as_bytes())?;
    }
    Ok(())
}

/// Everything the command line asks for
#[derive(Debug)]
pub struct CliRequest {
    pub url: String,
    pub method: HttpMethod,
    pub fields: Vec<(String, String)>,
    pub follow_redirects: bool,
    pub capture_response: bool,
    pub config: TransportConfig,
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("tinycurl")
        .version(crate::VERSION)
        .about("Send validated HTTP GET and POST requests")
        .arg(
            Arg::new("url")
                .help("The URL to request")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("request")
                .short('X')
                .long("request")
                .value_name("METHOD")
                .help("HTTP request method (GET or POST)"),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("KEY=VALUE")
                .help("Form field to POST, may be repeated")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-location")
                .long("no-location")
                .help("Do not follow redirects")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-redirs")
                .long("max-redirs")
                .value_name("NUM")
                .help("Maximum number of redirects to follow")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the response body to FILE instead of stdout"),
        )
        .arg(
            Arg::new("user-agent")
                .short('A')
                .long("user-agent")
                .value_name("STRING")
                .help("User-Agent header"),
        )
        .arg(
            Arg::new("proxy")
                .short('x')
                .long("proxy")
                .value_name("[PROTOCOL://]HOST[:PORT]")
                .help("Use proxy server"),
        )
        .arg(
            Arg::new("proxy-user")
                .short('U')
                .long("proxy-user")
                .value_name("USER:PASSWORD")
                .help("Proxy credentials"),
        )
        .arg(
            Arg::new("insecure")
                .short('k')
                .long("insecure")
                .help("Allow insecure SSL connections")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .short('m')
                .long("timeout")
                .value_name("SECONDS")
                .help("Maximum time for operation")
                .default_value("300"),
        )
        .arg(
            Arg::new("connect-timeout")
                .long("connect-timeout")
                .value_name("SECONDS")
                .help("Maximum time for connection")
                .default_value("30"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose logging")
                .action(ArgAction::SetTrue),
        )
}

/// Build the request description from command line arguments
pub fn build_request_from_args(matches: &ArgMatches) -> Result<CliRequest> {
    let mut config = TransportConfig::default();

    let url = matches
        .get_one::<String>("url")
        .cloned()
        .ok_or(CurlError::MissingUrl)?;

    let mut fields = Vec::new();
    if let Some(data) = matches.get_many::<String>("data") {
        for field in data {
            fields.push(StringUtils::parse_field(field)?);
        }
    }

    // -d implies POST unless a method is given explicitly
    let method = match matches.get_one::<String>("request") {
        Some(method_str) => method_str
            .parse::<HttpMethod>()
            .map_err(|_| CurlError::Config(format!("Unknown HTTP method: {}", method_str)))?,
        None if !fields.is_empty() => HttpMethod::Post,
        None => HttpMethod::Get,
    };
    if method == HttpMethod::Get && !fields.is_empty() {
        return Err(CurlError::Config(
            "Form data cannot be sent with GET".to_string(),
        ));
    }

    if let Some(max_redirects) = matches.get_one::<u32>("max-redirs") {
        config.max_redirects = *max_redirects;
    }

    let capture_response = match matches.get_one::<String>("output") {
        Some(file) => {
            config.output.file = Some(PathBuf::from(file));
            false
        }
        None => true,
    };

    if let Some(user_agent) = matches.get_one::<String>("user-agent") {
        config.user_agent = Some(user_agent.clone());
    }

    if let Some(proxy_url) = matches.get_one::<String>("proxy") {
        let (username, password) = match matches.get_one::<String>("proxy-user") {
            Some(user) => match user.split_once(':') {
                Some((name, pass)) => (Some(name.to_string()), Some(pass.to_string())),
                None => (Some(user.clone()), Some(String::new())),
            },
            None => (None, None),
        };
        config.proxy = Some(ProxyConfig {
            url: proxy_url.clone(),
            username,
            password,
        });
    }

    config.verify_certs = !matches.get_flag("insecure");

    if let Some(timeout_str) = matches.get_one::<String>("timeout") {
        config.timeout = StringUtils::parse_timeout(timeout_str)?;
    }

    if let Some(connect_timeout_str) = matches.get_one::<String>("connect-timeout") {
        config.connect_timeout = StringUtils::parse_timeout(connect_timeout_str)?;
    }

    Ok(CliRequest {
        url,
        method,
        fields,
        follow_redirects: !matches.get_flag("no-location"),
        capture_response,
        config,
    })
}
