//! Plain-text rendering for the CLI.

use mesh_destinations::{CandidateSet, Destination, SectionEntries};
use mesh_state::MeshState;
use std::fmt::{self, Write};

/// Summary of the whole state. Key material is never printed.
pub fn render_state(state: &MeshState) -> String {
    render(|out| write_state(out, state))
}

/// Heartbeat destination candidates, one section per category.
pub fn render_candidates(candidates: &CandidateSet) -> String {
    render(|out| write_candidates(out, candidates))
}

pub fn render_destination(destination: &Destination) -> String {
    format!("{} {}", destination.address(), destination.title())
}

/// Writing into a `String` cannot fail, so an error here is a formatting bug
/// in one of the writers and the partial output is returned as is.
fn render<F>(write: F) -> String
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut out = String::new();
    if let Err(e) = write(&mut out) {
        tracing::warn!("Report rendering stopped early: {}", e);
    }
    out
}

fn write_state<W: Write>(out: &mut W, state: &MeshState) -> fmt::Result {
    writeln!(out, "Network:         {}", state.name())?;
    writeln!(out, "Unicast address: {}", state.unicast_address())?;
    writeln!(out, "IV index:        {}", state.iv_index())?;
    writeln!(out, "Global TTL:      {}", state.global_ttl())?;

    writeln!(out, "\nNetwork Keys ({})", state.keys().network_key_count())?;
    for key in state.keys().network_keys() {
        writeln!(out, "  [{}] {}", key.index, key.name)?;
    }

    writeln!(
        out,
        "\nApplication Keys ({})",
        state.keys().application_key_count()
    )?;
    for key in state.application_keys() {
        writeln!(
            out,
            "  [{}] {} (bound to {})",
            key.index, key.name, key.bound_network_key
        )?;
    }

    writeln!(out, "\nNodes ({})", state.nodes().len())?;
    for node in state.nodes().iter() {
        writeln!(
            out,
            "  {} {} {}",
            node.unicast_address(),
            node.uuid,
            node.display_name()
        )?;
    }

    writeln!(out, "\nGroups ({})", state.groups().len())?;
    for group in state.groups().iter() {
        let marker = if group.is_virtual() { " (virtual)" } else { "" };
        writeln!(out, "  {} {}{}", group.address(), group.name, marker)?;
    }
    Ok(())
}

fn write_candidates<W: Write>(out: &mut W, candidates: &CandidateSet) -> fmt::Result {
    for section in candidates.sections() {
        match section.category.title() {
            Some(title) => writeln!(out, "{}", title)?,
            None => writeln!(out)?,
        }
        match &section.entries {
            SectionEntries::Keys(keys) => {
                for key in keys {
                    writeln!(out, "  [{}] {}", key.index, key.name)?;
                }
            }
            SectionEntries::Destinations(destinations) if destinations.is_empty() => {
                writeln!(out, "  (none)")?;
            }
            SectionEntries::Destinations(destinations) => {
                for destination in destinations {
                    writeln!(out, "  {}", render_destination(destination))?;
                }
            }
        }
    }
    Ok(())
}
