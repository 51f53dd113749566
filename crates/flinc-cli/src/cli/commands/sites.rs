//! `flinc sites` – list supported sites; `*` marks the configured defaults.

use flinc_core::config::FlincConfig;
use flinc_core::sites;

pub fn run_sites(cfg: &FlincConfig) {
    println!("  {:<15} {:<15} {}", "ID", "NAME", "BASE URL");
    for def in sites::catalog() {
        let mark = if cfg.default_sites.contains(&def.id) { '*' } else { ' ' };
        println!("{mark} {:<15} {:<15} {}", def.id.as_str(), def.display_name, def.base_url);
        if let Some(note) = def.note {
            println!("  {:<15} {note}", "");
        }
    }
}
