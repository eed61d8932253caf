//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the hosp CLI.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// hosp - A Rust CLI console for the hospital admin server
#[derive(Parser, Debug)]
#[command(name = "hosp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override server base URL (default: from config)
    #[arg(long, global = true, env = "HOSP_SERVER")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage doctors
    #[command(alias = "d")]
    Doctors {
        #[command(subcommand)]
        command: DoctorCommands,
    },

    /// Manage patients
    #[command(alias = "p")]
    Patients {
        #[command(subcommand)]
        command: PatientCommands,
    },

    /// Manage nurses
    #[command(alias = "n")]
    Nurses {
        #[command(subcommand)]
        command: NurseCommands,
    },

    /// Manage departments
    Departments {
        #[command(subcommand)]
        command: DepartmentCommands,
    },

    /// Manage appointments
    #[command(alias = "a")]
    Appointments {
        #[command(subcommand)]
        command: AppointmentCommands,
    },

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Shared address flags for add/edit forms.
#[derive(Args, Debug, Default, Clone)]
pub struct AddressArgs {
    #[arg(long, default_value = "")]
    pub street: String,

    #[arg(long, default_value = "")]
    pub county: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub state: String,

    #[arg(long, default_value = "")]
    pub country: String,

    #[arg(long, default_value = "")]
    pub zipcode: String,
}

/// Optional address overrides for edit forms.
#[derive(Args, Debug, Default, Clone)]
pub struct AddressEditArgs {
    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub county: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub zipcode: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DoctorCommands {
    /// List doctors
    #[command(alias = "ls")]
    List {
        /// Show only rows containing this text (any column, case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Show only doctors in this department
        #[arg(long)]
        department: Option<i64>,
    },

    /// Show one doctor
    Show { id: i64 },

    /// Add a doctor
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,

        /// Department id
        #[arg(long)]
        department: i64,

        /// Category: Medicine, Surgery or Radiologist
        #[arg(long)]
        category: String,

        /// Years of experience
        #[arg(long)]
        experience: i32,

        #[arg(long)]
        degree: String,

        #[command(flatten)]
        address: AddressArgs,
    },

    /// Edit a doctor (unset flags keep their current values)
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        department: Option<i64>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        experience: Option<i32>,

        #[arg(long)]
        degree: Option<String>,

        #[command(flatten)]
        address: AddressEditArgs,
    },

    /// Delete a doctor
    #[command(alias = "rm")]
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PatientCommands {
    /// List patients
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one patient
    Show { id: i64 },

    /// Add a patient
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,

        #[command(flatten)]
        address: AddressArgs,
    },

    /// Edit a patient (unset flags keep their current values)
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[command(flatten)]
        address: AddressEditArgs,
    },

    /// Delete a patient
    #[command(alias = "rm")]
    Delete {
        id: i64,

        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum NurseCommands {
    /// List nurses
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one nurse
    Show { id: i64 },

    /// Add a nurse
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,

        /// Supervising doctor (name or id)
        #[arg(long)]
        doctor: String,

        #[command(flatten)]
        address: AddressArgs,
    },

    /// Edit a nurse (unset flags keep their current values)
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Supervising doctor (name or id)
        #[arg(long)]
        doctor: Option<String>,

        #[command(flatten)]
        address: AddressEditArgs,
    },

    /// Delete a nurse
    #[command(alias = "rm")]
    Delete {
        id: i64,

        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DepartmentCommands {
    /// List departments
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one department
    Show { id: i64 },

    /// Add a department
    Add {
        #[arg(long)]
        name: String,
    },

    /// Edit a department
    Edit {
        id: i64,

        #[arg(long)]
        name: String,
    },

    /// Delete a department
    #[command(alias = "rm")]
    Delete {
        id: i64,

        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// List appointments
    #[command(alias = "ls")]
    List {
        /// Show only rows containing this text (any column, case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Hide appointments before this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Hide appointments after this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Show one appointment
    Show { id: i64 },

    /// Schedule an appointment
    Add {
        /// Patient (name or id)
        #[arg(long)]
        patient: String,

        /// Doctor (name or id)
        #[arg(long)]
        doctor: String,

        /// Start time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: String,

        /// End time; defaults to 30 minutes after start
        #[arg(long)]
        end: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Edit an appointment (unset flags keep their current values)
    Edit {
        id: i64,

        /// Patient (name or id)
        #[arg(long)]
        patient: Option<String>,

        /// Doctor (name or id)
        #[arg(long)]
        doctor: Option<String>,

        /// Start time (YYYY-MM-DDTHH:MM); re-derives the end time
        #[arg(long)]
        start: Option<String>,

        /// End time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Cancel an appointment
    #[command(alias = "rm")]
    Delete {
        id: i64,

        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,

    /// Write a default config file if none exists
    Init,

    /// Print the config file path
    Path,
}
