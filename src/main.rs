use clap::{Args, Parser, Subcommand};
use leave_client::app::{App, AppError};
use leave_client::config::{ClientConfig, ConfigError};
use leave_client::router::{Navigation, NavigationError};
use leave_client::services::ServiceError;
use leave_client::types::{ApprovalAction, Identifier, LeaveApplicationRequest, ManagerQuery, Record};
use leave_client::util::date::parse_date;
use serde::Serialize;
use serde_json::{Value, json};
use time::Date;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("missing password; pass --password or set LEAVE_PASSWORD")]
    MissingPassword,
    #[error("expected a JSON object for --data")]
    ExpectedObject,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "leave-cli", about = "Leave-management API client")]
struct Cli {
    /// Backend origin; overrides LEAVE_API_HOST from the environment.
    #[arg(long, env = "LEAVE_API_HOST")]
    base_url: Option<String>,

    /// Log in with this employee id before running the command.
    #[arg(long, env = "LEAVE_EMP_ID")]
    emp_id: Option<String>,

    #[arg(long, env = "LEAVE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Debug-level logs on stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Identity bound to the current session.
    Whoami,
    Logout,
    Leave(LeaveCommand),
    Approval(ApprovalCommand),
    Employee(EmployeeCommand),
    Options(OptionsCommand),
    /// Run a navigation through the route guard and print where it lands.
    Navigate {
        location: String,
    },
    /// Print the route table.
    Routes,
}

#[derive(Args, Debug)]
struct LeaveCommand {
    #[command(subcommand)]
    command: LeaveSubcommand,
}

#[derive(Subcommand, Debug)]
enum LeaveSubcommand {
    Types,
    Summary,
    Apply {
        #[arg(long)]
        leave_type_id: Identifier,
        #[arg(long, value_parser = parse_date)]
        start: Date,
        #[arg(long, value_parser = parse_date)]
        end: Date,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ApprovalCommand {
    #[command(subcommand)]
    command: ApprovalSubcommand,
}

#[derive(Subcommand, Debug)]
enum ApprovalSubcommand {
    Pending,
    Approve {
        step_id: i64,
        #[arg(long)]
        comments: Option<String>,
    },
    Reject {
        step_id: i64,
        #[arg(long)]
        comments: Option<String>,
    },
}

#[derive(Args, Debug)]
struct EmployeeCommand {
    #[command(subcommand)]
    command: EmployeeSubcommand,
}

#[derive(Subcommand, Debug)]
enum EmployeeSubcommand {
    List {
        #[arg(long)]
        department_id: Option<i64>,
    },
    Get {
        id: Identifier,
    },
    Create {
        #[arg(long, help = "Employee record as a JSON object")]
        data: String,
    },
    Update {
        id: Identifier,
        #[arg(long, help = "Employee record as a JSON object")]
        data: String,
    },
}

#[derive(Args, Debug)]
struct OptionsCommand {
    #[command(subcommand)]
    command: OptionsSubcommand,
}

#[derive(Subcommand, Debug)]
enum OptionsSubcommand {
    Departments,
    Titles,
    Managers {
        #[arg(long)]
        department_id: Option<i64>,
        #[arg(long)]
        employee_id: Option<Identifier>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_api_host(base_url)?;
    }
    let mut app = App::from_config(config)?;

    if let Some(emp_id) = &cli.emp_id {
        let password = cli.password.as_deref().ok_or(CliError::MissingPassword)?;
        app.auth.login(emp_id, password).await?;
    }

    match cli.command {
        Command::Whoami => print_json(&app.auth.current_user().await?),
        Command::Logout => {
            app.auth.logout().await?;
            print_json(&json!({ "loggedOut": true }))
        }
        Command::Leave(leave) => run_leave(&app, leave).await,
        Command::Approval(approval) => run_approval(&app, approval).await,
        Command::Employee(employee) => run_employee(&app, employee).await,
        Command::Options(options) => run_options(&app, options).await,
        Command::Navigate { location } => {
            let nav = app.router.navigate(&location).await?;
            print_json(&navigation_json(&nav))
        }
        Command::Routes => run_routes(&app),
    }
}

async fn run_leave(app: &App, leave: LeaveCommand) -> Result<(), CliError> {
    match leave.command {
        LeaveSubcommand::Types => print_json(&app.leave.get_leave_types().await?),
        LeaveSubcommand::Summary => print_json(&app.leave.get_leave_summary().await?),
        LeaveSubcommand::Apply { leave_type_id, start, end, reason } => {
            let mut request = LeaveApplicationRequest::new(leave_type_id, start, end);
            if let Some(reason) = reason {
                request = request.with_reason(reason);
            }
            print_json(&app.leave.submit_leave_application(&request).await?)
        }
    }
}

async fn run_approval(app: &App, approval: ApprovalCommand) -> Result<(), CliError> {
    let (step_id, action, comments) = match approval.command {
        ApprovalSubcommand::Pending => return print_json(&app.approval.get_pending_approvals().await?),
        ApprovalSubcommand::Approve { step_id, comments } => (step_id, ApprovalAction::Approve, comments),
        ApprovalSubcommand::Reject { step_id, comments } => (step_id, ApprovalAction::Reject, comments),
    };
    let body = app
        .approval
        .submit_approval_action(step_id, action, comments.as_deref())
        .await?;
    print_json(&body)
}

async fn run_employee(app: &App, employee: EmployeeCommand) -> Result<(), CliError> {
    match employee.command {
        EmployeeSubcommand::List { department_id } => {
            print_json(&app.employee.get_employee_list(department_id).await?)
        }
        EmployeeSubcommand::Get { id } => print_json(&app.employee.get_employee_details(&id).await?),
        EmployeeSubcommand::Create { data } => {
            let record = parse_record(&data)?;
            print_json(&app.employee.create_new_employee(&record).await?)
        }
        EmployeeSubcommand::Update { id, data } => {
            let record = parse_record(&data)?;
            print_json(&app.employee.update_existing_employee(&id, &record).await?)
        }
    }
}

async fn run_options(app: &App, options: OptionsCommand) -> Result<(), CliError> {
    match options.command {
        OptionsSubcommand::Departments => print_json(&app.employee.fetch_department_options().await?),
        OptionsSubcommand::Titles => print_json(&app.employee.fetch_title_options().await?),
        OptionsSubcommand::Managers { department_id, employee_id } => {
            let query = ManagerQuery { department_id, employee_id };
            print_json(&app.employee.fetch_manager_options(&query).await?)
        }
    }
}

fn run_routes(app: &App) -> Result<(), CliError> {
    let routes: Vec<Value> = app
        .router
        .table()
        .routes()
        .iter()
        .map(|route| {
            json!({
                "name": route.name,
                "path": route.path,
                "view": format!("{:?}", route.view),
                "title": route.title,
                "requiredRoles": route.required_roles,
                "redirect": route.redirect,
            })
        })
        .collect();
    print_json(&routes)
}

fn navigation_json(nav: &Navigation) -> Value {
    json!({
        "route": nav.route.name,
        "location": nav.location.full_path(),
        "redirectedFrom": nav.redirected_from,
    })
}

fn parse_record(data: &str) -> Result<Record, CliError> {
    match serde_json::from_str::<Value>(data)? {
        Value::Object(record) => Ok(record),
        _ => Err(CliError::ExpectedObject),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
