//! System information commands: ipconfig, systeminfo, tasklist, date, time,
//! ver, whoami.

use nexa_types::error::Result;
use nexa_types::line::TerminalLine;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the system information commands into a registry.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(IpconfigCmd));
    reg.register(Box::new(SysteminfoCmd));
    reg.register(Box::new(TasklistCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(TimeCmd));
    reg.register(Box::new(VerCmd));
    reg.register(Box::new(WhoamiCmd));
}

fn lines<I, S>(texts: I) -> CommandOutput
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CommandOutput::Lines(texts.into_iter().map(TerminalLine::output).collect())
}

// ---------------------------------------------------------------------------
// ipconfig
// ---------------------------------------------------------------------------

struct IpconfigCmd;
impl Command for IpconfigCmd {
    fn name(&self) -> &str {
        "ipconfig"
    }
    fn description(&self) -> &str {
        "Displays network configuration"
    }
    fn usage(&self) -> &str {
        "ipconfig"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let host = env.platform.host_info()?;
        let net = &env.config.network;
        Ok(lines([
            String::new(),
            "Windows IP Configuration".to_string(),
            String::new(),
            format!("Ethernet adapter {}:", net.adapter),
            String::new(),
            format!(
                "   Connection-specific DNS Suffix  . : {}",
                host.connection_type
            ),
            format!("   IPv4 Address. . . . . . . . . . . : {}", net.ipv4_address),
            format!("   Subnet Mask . . . . . . . . . . . : {}", net.subnet_mask),
            format!(
                "   Default Gateway . . . . . . . . . : {}",
                net.default_gateway
            ),
            String::new(),
        ]))
    }
}

// ---------------------------------------------------------------------------
// systeminfo
// ---------------------------------------------------------------------------

struct SysteminfoCmd;
impl Command for SysteminfoCmd {
    fn name(&self) -> &str {
        "systeminfo"
    }
    fn description(&self) -> &str {
        "Displays detailed system configuration"
    }
    fn usage(&self) -> &str {
        "systeminfo"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let host = env.platform.host_info()?;
        let cfg = env.config;
        let total_mb = (host.memory_gb * 1024.0).round();
        let available_mb = (total_mb * (1.0 - host.memory_used_percent / 100.0)).floor();
        let row = |label: &str, value: String| format!("{:<27}{value}", format!("{label}:"));
        Ok(lines([
            String::new(),
            row("Host Name", cfg.host_name.clone()),
            row("OS Name", host.platform.clone()),
            row("OS Version", cfg.os_version.clone()),
            row("System Manufacturer", cfg.manufacturer.clone()),
            row("System Model", cfg.product.clone()),
            row(
                "Processor(s)",
                format!("{} Processor(s) Installed.", host.cores),
            ),
            row("Total Physical Memory", format!("{total_mb} MB")),
            row("Available Physical Memory", format!("{available_mb} MB")),
            String::new(),
        ]))
    }
}

// ---------------------------------------------------------------------------
// tasklist
// ---------------------------------------------------------------------------

struct Process {
    image: &'static str,
    pid: u32,
    session: &'static str,
    session_no: u32,
    mem: &'static str,
}

const PROCESSES: &[Process] = &[
    Process {
        image: "System Idle Process",
        pid: 0,
        session: "Services",
        session_no: 0,
        mem: "8 K",
    },
    Process {
        image: "System",
        pid: 4,
        session: "Services",
        session_no: 0,
        mem: "2,048 K",
    },
    Process {
        image: "nexa-os.exe",
        pid: 1234,
        session: "Console",
        session_no: 1,
        mem: "45,632 K",
    },
    Process {
        image: "chrome.exe",
        pid: 5678,
        session: "Console",
        session_no: 1,
        mem: "256,789 K",
    },
    Process {
        image: "explorer.exe",
        pid: 9012,
        session: "Console",
        session_no: 1,
        mem: "32,456 K",
    },
];

struct TasklistCmd;
impl Command for TasklistCmd {
    fn name(&self) -> &str {
        "tasklist"
    }
    fn description(&self) -> &str {
        "Displays currently running processes"
    }
    fn usage(&self) -> &str {
        "tasklist"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = vec![
            String::new(),
            format!(
                "{:<25} {:>8} {:<16} {:>11} {:>12}",
                "Image Name", "PID", "Session Name", "Session#", "Mem Usage"
            ),
            format!(
                "{} {} {} {} {}",
                "=".repeat(25),
                "=".repeat(8),
                "=".repeat(16),
                "=".repeat(11),
                "=".repeat(12)
            ),
        ];
        for p in PROCESSES {
            out.push(format!(
                "{:<25} {:>8} {:<16} {:>11} {:>11}",
                p.image, p.pid, p.session, p.session_no, p.mem
            ));
        }
        out.push(String::new());
        Ok(lines(out))
    }
}

// ---------------------------------------------------------------------------
// date / time
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Displays or sets the date"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = env.platform.now()?;
        Ok(lines([
            format!("The current date is: {}", now.short_date()),
            String::new(),
        ]))
    }
}

struct TimeCmd;
impl Command for TimeCmd {
    fn name(&self) -> &str {
        "time"
    }
    fn description(&self) -> &str {
        "Displays or sets the system time"
    }
    fn usage(&self) -> &str {
        "time"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = env.platform.now()?;
        Ok(lines([
            format!("The current time is: {}", now.short_time()),
            String::new(),
        ]))
    }
}

// ---------------------------------------------------------------------------
// ver
// ---------------------------------------------------------------------------

struct VerCmd;
impl Command for VerCmd {
    fn name(&self) -> &str {
        "ver"
    }
    fn description(&self) -> &str {
        "Displays the Windows version"
    }
    fn usage(&self) -> &str {
        "ver"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(lines([
            String::new(),
            format!("{} [Version {}]", env.config.product, env.config.version),
            String::new(),
        ]))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Displays user information"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(lines([env.config.account(), String::new()]))
    }
}
