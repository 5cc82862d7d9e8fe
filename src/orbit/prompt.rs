//! The interactive prompt and result formatting.

use std::io::{BufRead, Write};

use itertools::Itertools;
use tracing::warn;

use super::{parse_binding, parse_insertion_args, OrbitError, OrbitSystem, OrbitVariable};
use super::{DEFAULT_GM, GM_KERBIN};

/// The word that ends the interactive input of bindings.
pub const EXIT: &str = "exit";

fn read_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<String, OrbitError> {
    Ok(lines.next().transpose()?.unwrap_or_default())
}

/// Ask for orbit parameters on `output` and feed the answers from `input`
/// into `system`.
///
/// The user either describes an insertion orbit on a single line
/// (`height portion [GM]`), or types one `name=value` binding per line until
/// [`EXIT`] or the end of input. Malformed bindings are reported on `output`
/// and skipped.
pub fn run_prompt(
    system: &mut OrbitSystem,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), OrbitError> {
    let mut lines = input.lines();

    writeln!(
        output,
        "Do you want to calculate an insertion orbit of another orbit? \
        (Yes/No), No will let you specify all parameters by yourself:"
    )?;
    if read_line(&mut lines)?.trim().eq_ignore_ascii_case("yes") {
        writeln!(
            output,
            "Nice, please specify your parameters in the format:\n\
            \"height period_portion GM\".\n\
            If you don't provide a GM, {DEFAULT_GM} is used:"
        )?;
        let line = read_line(&mut lines)?;
        let args = line.split_whitespace().collect_vec();
        system.add(parse_insertion_args(&args[..])?);
        return Ok(());
    }

    writeln!(
        output,
        "Okay, now you can go ahead and type all the variables with their values \
        in the format:\nname:value or name=value\n\
        If you want to leave at any point, just type in \"{EXIT}\"."
    )?;
    for line in lines {
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case(EXIT) {
            break;
        }
        if line.is_empty() {
            continue;
        }
        match parse_binding(line) {
            Ok((name, value)) => {
                system.set(name, value);
            }
            Err(err) => {
                warn!(input = line, "ignoring malformed binding");
                writeln!(output, "{err}")?;
            }
        }
    }
    Ok(())
}

/// Assume the central body is Kerbin if no gravitational parameter is known.
///
/// Returns true if the default was applied.
pub fn ensure_gm(system: &mut OrbitSystem) -> bool {
    if system.known_variables().contains_key(&OrbitVariable::Gm) {
        return false;
    }
    system.set(OrbitVariable::Gm, GM_KERBIN);
    true
}

/// Format the known bindings, one `name = value` per line in variable order.
pub fn format_bindings(system: &OrbitSystem) -> String {
    let known = system.known_variables();
    OrbitVariable::ALL
        .into_iter()
        .filter_map(|var| known.get(&var).map(|value| format!("{var} = {value}")))
        .join("\n")
}
