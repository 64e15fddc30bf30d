//! Busy-port report.
//!
//! Only ports the project is likely to serve on are probed. When no marker
//! points at a port, the canonical development ports are probed instead.

use crate::context::ReportContext;
use crate::detection::{detect_project_markers, Marker, ProjectMarkers};
use crate::probe::PortProbe;
use crate::ui::UserInterface;

use super::hints;

/// Canonical development ports, also the fallback candidate list.
pub const DEFAULT_PORTS: [u16; 4] = [3000, 5000, 8000, 8080];

/// A candidate port with a listening process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyPort {
    pub port: u16,
    pub process: String,
}

/// Ports worth probing for a project with `markers`, in probe order.
pub fn candidate_ports(markers: &ProjectMarkers) -> Vec<u16> {
    let mut ports = Vec::new();

    if markers.has(Marker::FlaskRequirement)
        || markers.has(Marker::AppPy)
        || markers.has(Marker::MainPy)
    {
        ports.push(5000);
    }
    if markers.has(Marker::PackageJson) {
        ports.push(3000);
    }
    if markers.has(Marker::ManagePy) {
        ports.push(8000);
    }
    if markers.has(Marker::DockerCompose) {
        ports.push(8080);
    }

    if ports.is_empty() {
        DEFAULT_PORTS.to_vec()
    } else {
        ports
    }
}

/// Probe each port once, keeping those with a listener.
pub fn find_busy_ports(ports: &[u16], probe: &dyn PortProbe) -> Vec<BusyPort> {
    ports
        .iter()
        .filter_map(|&port| {
            probe
                .listener(port)
                .map(|process| BusyPort { port, process })
        })
        .collect()
}

/// Report candidate ports that are already taken.
pub fn check(ctx: &ReportContext, probe: &dyn PortProbe, ui: &mut dyn UserInterface) {
    let candidates = candidate_ports(&detect_project_markers(ctx.project_root()));
    tracing::debug!("Probing ports {:?}", candidates);

    let busy = find_busy_ports(&candidates, probe);
    report(ctx, &busy, ui);
}

/// Render an already computed list of busy ports.
pub fn report(ctx: &ReportContext, busy: &[BusyPort], ui: &mut dyn UserInterface) {
    if busy.is_empty() {
        if ctx.is_verbose() {
            let ports: Vec<String> = DEFAULT_PORTS.iter().map(u16::to_string).collect();
            ui.success(&format!("Ports {} available", ports.join(", ")));
        }
        return;
    }

    ui.warning("Ports in use:");
    for entry in busy {
        ui.message(&format!("  Port {}: {}", entry.port, entry.process));
    }

    if ctx.is_verbose() {
        ui.show_hint(hints::free_ports());
    } else {
        ui.show_command(Some("Free a port"), hints::KILL_BY_PORT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FakePortProbe;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn markers(list: &[Marker]) -> ProjectMarkers {
        list.iter().copied().collect()
    }

    #[test]
    fn no_markers_fall_back_to_defaults() {
        assert_eq!(candidate_ports(&ProjectMarkers::default()), vec![3000, 5000, 8000, 8080]);
    }

    #[test]
    fn unrelated_markers_fall_back_to_defaults() {
        let m = markers(&[Marker::Dockerfile, Marker::PyprojectToml]);

        assert_eq!(candidate_ports(&m), DEFAULT_PORTS.to_vec());
    }

    #[test]
    fn candidates_follow_marker_order() {
        let m = markers(&[
            Marker::DockerCompose,
            Marker::ManagePy,
            Marker::PackageJson,
            Marker::AppPy,
        ]);

        assert_eq!(candidate_ports(&m), vec![5000, 3000, 8000, 8080]);
    }

    #[test]
    fn flask_or_entry_point_selects_5000() {
        assert_eq!(candidate_ports(&markers(&[Marker::FlaskRequirement])), vec![5000]);
        assert_eq!(candidate_ports(&markers(&[Marker::MainPy])), vec![5000]);
    }

    #[test]
    fn plain_requirements_does_not_select_5000() {
        let m = markers(&[Marker::RequirementsTxt, Marker::PackageJson]);

        assert_eq!(candidate_ports(&m), vec![3000]);
    }

    #[test]
    fn find_busy_ports_probes_each_once() {
        let probe = FakePortProbe::new().with_listener(8000, "python3");

        let busy = find_busy_ports(&[3000, 8000], &probe);

        assert_eq!(
            busy,
            vec![BusyPort {
                port: 8000,
                process: "python3".to_string()
            }]
        );
        assert_eq!(probe.probed(), vec![3000, 8000]);
    }

    #[test]
    fn empty_project_probes_default_list() {
        let temp = TempDir::new().unwrap();
        let ctx = ReportContext::new(temp.path(), OutputMode::Verbose);
        let probe = FakePortProbe::new();
        let mut ui = MockUI::new();

        check(&ctx, &probe, &mut ui);

        assert_eq!(probe.probed(), vec![3000, 5000, 8000, 8080]);
        assert_eq!(ui.lines(), ["✓ Ports 3000, 5000, 8000, 8080 available"]);
    }

    #[test]
    fn available_message_names_canonical_ports_for_any_probe_set() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        let ctx = ReportContext::new(temp.path(), OutputMode::Verbose);
        // 8080 is taken but not a candidate for a Node.js project.
        let probe = FakePortProbe::new().with_listener(8080, "java");
        let mut ui = MockUI::new();

        check(&ctx, &probe, &mut ui);

        assert_eq!(probe.probed(), vec![3000]);
        assert_eq!(ui.lines(), ["✓ Ports 3000, 5000, 8000, 8080 available"]);
    }

    #[test]
    fn busy_terse_prints_generic_kill() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        let ctx = ReportContext::new(temp.path(), OutputMode::Normal);
        let probe = FakePortProbe::new().with_listener(3000, "node");
        let mut ui = MockUI::new();

        check(&ctx, &probe, &mut ui);

        assert_eq!(
            ui.lines(),
            [
                "⚠ Ports in use:",
                "  Port 3000: node",
                "  Free a port: kill $(lsof -t -i:PORT)",
            ]
        );
    }

    #[test]
    fn busy_verbose_prints_hint() {
        let ctx = ReportContext::new(std::path::Path::new("/p"), OutputMode::Verbose);
        let busy = vec![
            BusyPort {
                port: 3000,
                process: "node".to_string(),
            },
            BusyPort {
                port: 8000,
                process: "python3".to_string(),
            },
        ];
        let mut ui = MockUI::new();

        report(&ctx, &busy, &mut ui);

        assert_eq!(
            ui.lines(),
            [
                "⚠ Ports in use:",
                "  Port 3000: node",
                "  Port 8000: python3",
                "  💡 Stop those processes or start the app on another port.",
            ]
        );
    }

    #[test]
    fn none_busy_terse_is_silent() {
        let ctx = ReportContext::new(std::path::Path::new("/p"), OutputMode::Normal);
        let mut ui = MockUI::new();

        report(&ctx, &[], &mut ui);

        assert!(ui.lines().is_empty());
    }
}
