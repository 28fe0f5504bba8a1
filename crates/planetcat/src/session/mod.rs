//! Interactive menu session.
//!
//! A [`Session`] drives the admin and researcher menus over any line-based
//! input and output, calling into the [`Catalogue`] stores. Store errors are
//! reported to the user and the menu carries on; only I/O failures end a
//! session early. End of input ends it cleanly.

mod console;
pub mod render;

pub use console::Console;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::catalogue::{Catalogue, Planet, PlanetUpdate, ResearcherHandle, ResearcherId};
use crate::config::DisplayConfig;
use crate::error::{Error, Result};

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Which menu a session starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Show the main menu and let the user pick.
    #[default]
    Any,
    /// Go straight to the admin menu.
    Admin,
    /// Go straight to the researcher menu.
    Researcher,
}

/// One run of the interactive menus over a catalogue.
#[derive(Debug)]
pub struct Session<R, W> {
    catalogue: Catalogue,
    console: Console<R, W>,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading from `input` and writing to `output`.
    pub fn new(catalogue: Catalogue, display: DisplayConfig, input: R, output: W) -> Self {
        Self {
            catalogue,
            console: Console::new(input, output),
            display,
        }
    }

    /// The catalogue the session works on.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Consume the session, returning the catalogue and output stream.
    pub fn into_parts(self) -> (Catalogue, W) {
        (self.catalogue, self.console.into_output())
    }

    /// Run until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the console fails.
    pub fn run(&mut self, role: Role) -> Result<()> {
        info!(?role, "session started");
        let result = match role {
            Role::Any => self.main_menu(),
            Role::Admin => self.admin_menu(),
            Role::Researcher => self.researcher_login(),
        };
        match result {
            Err(Error::InputClosed) => {
                info!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.console.say("Welcome to the Planet Catalog System")?;
            self.console.say("1. Admin Menu")?;
            self.console.say("2. Researcher Menu")?;
            self.console.say("3. Exit")?;

            match self.console.choice()? {
                Some(1) => self.admin_menu()?,
                Some(2) => self.researcher_login()?,
                Some(3) => {
                    self.console.say("Exiting program...")?;
                    return Ok(());
                }
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn admin_menu(&mut self) -> Result<()> {
        loop {
            self.console.say("\nAdmin Menu:")?;
            self.console.say("1. Add Planet")?;
            self.console.say("2. Edit Planet")?;
            self.console.say("3. Remove Planet")?;
            self.console.say("4. Add Researcher")?;
            self.console.say("5. Edit Researcher")?;
            self.console.say("6. View Statistics")?;
            self.console.say("7. Exit")?;

            let choice = self.console.choice()?;
            debug!(?choice, "admin menu");
            match choice {
                Some(1) => self.add_planet()?,
                Some(2) => self.edit_planet()?,
                Some(3) => self.remove_planet()?,
                Some(4) => self.add_researcher()?,
                Some(5) => self.edit_researcher()?,
                Some(6) => self.view_statistics()?,
                Some(7) => return Ok(()),
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    /// Ask who is using the researcher menu, then run it for them.
    ///
    /// The prompt is skipped while no researchers are registered. An unknown
    /// id still opens the menu, without a current researcher.
    fn researcher_login(&mut self) -> Result<()> {
        if self.catalogue.researchers().is_empty() {
            return self.researcher_menu(None);
        }

        let id = ResearcherId(self.console.integer("Enter your researcher ID: ")?);
        let current = self.catalogue.researchers().find_by_id(id);
        if current.is_none() {
            self.console.say("Researcher not found.")?;
        }
        self.researcher_menu(current)
    }

    fn researcher_menu(&mut self, current: Option<ResearcherHandle>) -> Result<()> {
        loop {
            self.console.say("\nResearcher Menu:")?;
            self.console.say("1. Search Planet")?;
            self.console.say("2. View Contributions")?;
            self.console.say("3. Exit")?;

            let choice = self.console.choice()?;
            debug!(?choice, "researcher menu");
            match choice {
                Some(1) => self.search_planet()?,
                Some(2) => self.view_contributions(current)?,
                Some(3) => return Ok(()),
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn add_planet(&mut self) -> Result<()> {
        if self.catalogue.planets().is_full() {
            self.console.say("Planet catalogue is full!")?;
            return Ok(());
        }

        let planet = Planet {
            name: self.console.line("Enter planet name: ")?,
            kind: self.console.line("Enter planet type: ")?,
            size: self.console.number("Enter planet size: ")?,
            distance_from_star: self.console.number("Enter distance from star (in AU): ")?,
            orbital_period: self
                .console
                .number("Enter orbital period (in Earth years): ")?,
            description: self.console.line("Enter planet description: ")?,
            discovered: self
                .console
                .flag("Is this planet discovered? (1 for Yes, 0 for No): ")?,
            observed: self
                .console
                .flag("Is this planet observed? (1 for Yes, 0 for No): ")?,
        };

        match self.catalogue.planets_mut().add(planet) {
            Ok(_) => self.console.say("Planet added successfully!")?,
            Err(err) if err.is_capacity_exceeded() => {
                self.console.say("Planet catalogue is full!")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn edit_planet(&mut self) -> Result<()> {
        let name = self.console.line("Enter planet name to edit: ")?;
        let Some(current) = self.catalogue.planets().lookup(&name).cloned() else {
            self.console.say("Planet not found.")?;
            return Ok(());
        };

        let precision = self.display.precision;
        let update = PlanetUpdate {
            size: self.console.number(&format!(
                "Edit planet size (current: {:.precision$}): ",
                current.size
            ))?,
            distance_from_star: self.console.number(&format!(
                "Edit distance from star (current: {:.precision$} AU): ",
                current.distance_from_star
            ))?,
            orbital_period: self.console.number(&format!(
                "Edit orbital period (current: {:.precision$} years): ",
                current.orbital_period
            ))?,
            description: self.console.line("Edit description: ")?,
        };

        match self.catalogue.planets_mut().edit(&name, update) {
            Ok(_) => self.console.say("Planet updated successfully!")?,
            Err(err) if err.is_not_found() => self.console.say("Planet not found.")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn remove_planet(&mut self) -> Result<()> {
        let name = self.console.line("Enter planet name to remove: ")?;
        match self.catalogue.planets_mut().remove(&name) {
            Ok(_) => self.console.say("Planet removed successfully!")?,
            Err(err) if err.is_not_found() => self.console.say("Planet not found.")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn search_planet(&mut self) -> Result<()> {
        let name = self.console.line("Enter planet name to search: ")?;
        let details = self
            .catalogue
            .planets()
            .lookup(&name)
            .map(|planet| render::planet_details(planet, self.display.precision));
        match details {
            Some(details) => self.console.say(details),
            None => self.console.say("Planet not found."),
        }
    }

    fn add_researcher(&mut self) -> Result<()> {
        if self.catalogue.researchers().is_full() {
            self.console.say("Researcher list is full!")?;
            return Ok(());
        }

        let name = self.console.line("Enter researcher name: ")?;
        let email = self.console.line("Enter researcher email: ")?;

        match self.catalogue.researchers_mut().add(&name, &email) {
            Ok(id) => {
                self.console.say("Researcher added successfully!")?;
                let researchers = self.catalogue.researchers();
                let added = researchers
                    .find_by_id(id)
                    .and_then(|handle| researchers.get(handle));
                if let Some(researcher) = added {
                    self.console.say(render::researcher_details(researcher))?;
                }
            }
            Err(err) if err.is_capacity_exceeded() => {
                self.console.say("Researcher list is full!")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn edit_researcher(&mut self) -> Result<()> {
        let id = ResearcherId(self.console.integer("Enter researcher ID to edit: ")?);
        let researchers = self.catalogue.researchers();
        let Some(current) = researchers
            .find_by_id(id)
            .and_then(|handle| researchers.get(handle))
            .cloned()
        else {
            self.console.say("Researcher not found.")?;
            return Ok(());
        };

        let name = self
            .console
            .line(&format!("Edit researcher name (current: {}): ", current.name))?;
        let email = self
            .console
            .line(&format!("Edit researcher email (current: {}): ", current.email))?;

        match self.catalogue.researchers_mut().edit(id, &name, &email) {
            Ok(_) => self.console.say("Researcher updated successfully!")?,
            Err(err) if err.is_not_found() => self.console.say("Researcher not found.")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn view_statistics(&mut self) -> Result<()> {
        let stats = self.catalogue.planets().statistics();
        self.console.say(render::statistics(&stats))
    }

    fn view_contributions(&mut self, current: Option<ResearcherHandle>) -> Result<()> {
        let Some(current) = current else {
            return self.console.say("Researcher not found.");
        };
        match self.catalogue.researchers().contributions_of(current) {
            Ok(contributions) => self.console.say(format!(
                "Total contributions by this researcher: {contributions}"
            )),
            Err(err) if err.is_not_found() => self.console.say("Researcher not found."),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::config::CatalogueConfig;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn session_with(catalogue: Catalogue, script: &str) -> TestSession {
        Session::new(
            catalogue,
            DisplayConfig::default(),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn run(catalogue: Catalogue, role: Role, script: &str) -> (Catalogue, String) {
        let mut session = session_with(catalogue, script);
        session.run(role).unwrap();
        let (catalogue, output) = session.into_parts();
        (catalogue, String::from_utf8(output).unwrap())
    }

    const ADD_EARTH: &str = "1\nEarth\nTerrestrial\n1\n1\n1\nHome world\n1\n1\n";
    const ADD_MARS: &str = "1\nMars\nTerrestrial\n0.53\n1.52\n1.88\nRed planet\n1\n0\n";

    #[test]
    fn test_exit_from_main_menu() {
        let (_, out) = run(Catalogue::default(), Role::Any, "3\n");
        assert!(out.starts_with("Welcome to the Planet Catalog System\n"));
        assert!(out.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, out) = run(Catalogue::default(), Role::Any, "1\n1\nHalf");
        assert!(out.contains("Enter planet type: "));
    }

    #[test]
    fn test_invalid_choices() {
        let (_, out) = run(Catalogue::default(), Role::Any, "9\nabc\n1\n0\n7\n3\n");
        assert_eq!(out.matches(INVALID_CHOICE).count(), 3);
    }

    #[test]
    fn test_add_planet_and_statistics() {
        let script = format!("{ADD_EARTH}{ADD_MARS}6\n7\n");
        let (catalogue, out) = run(Catalogue::default(), Role::Admin, &script);

        assert_eq!(out.matches("Planet added successfully!").count(), 2);
        assert!(out.contains("Number of planets catalogued: 2"));
        assert!(out.contains("Number of discovered planets: 2"));
        assert!(out.contains("Number of observed planets: 1"));

        let mars = catalogue.planets().lookup("Mars").unwrap();
        assert_eq!(mars.description, "Red planet");
        assert!(mars.discovered);
        assert!(!mars.observed);
    }

    #[test]
    fn test_add_planet_retries_bad_number() {
        let script = "1\nEarth\nTerrestrial\nbig\n1\n1\n1\nHome\n1\n1\n7\n";
        let (catalogue, out) = run(Catalogue::default(), Role::Admin, script);

        assert!(out.contains("Invalid number. Please try again."));
        assert_eq!(catalogue.planets().len(), 1);
    }

    #[test]
    fn test_add_planet_when_full() {
        let config = CatalogueConfig {
            max_planets: 1,
            ..CatalogueConfig::default()
        };
        let script = format!("{ADD_EARTH}1\n7\n");
        let (catalogue, out) = run(Catalogue::new(&config), Role::Admin, &script);

        assert!(out.contains("Planet catalogue is full!"));
        assert_eq!(catalogue.planets().len(), 1);
    }

    #[test]
    fn test_edit_planet() {
        let script = format!("{ADD_EARTH}2\nEarth\n2\n3\n4\nBigger home\n7\n");
        let (catalogue, out) = run(Catalogue::default(), Role::Admin, &script);

        assert!(out.contains("Edit planet size (current: 1.00): "));
        assert!(out.contains("Edit distance from star (current: 1.00 AU): "));
        assert!(out.contains("Planet updated successfully!"));

        let earth = catalogue.planets().lookup("Earth").unwrap();
        assert!((earth.size - 2.0).abs() < f64::EPSILON);
        assert!((earth.orbital_period - 4.0).abs() < f64::EPSILON);
        assert_eq!(earth.description, "Bigger home");
        assert_eq!(earth.kind, "Terrestrial");
    }

    #[test]
    fn test_edit_missing_planet() {
        let (_, out) = run(Catalogue::default(), Role::Admin, "2\nPluto\n7\n");
        assert!(out.contains("Planet not found."));
        assert!(!out.contains("Edit planet size"));
    }

    #[test]
    fn test_remove_planet() {
        let script = format!("{ADD_EARTH}{ADD_MARS}3\nEarth\n3\nEarth\n7\n");
        let (catalogue, out) = run(Catalogue::default(), Role::Admin, &script);

        assert!(out.contains("Planet removed successfully!"));
        assert!(out.contains("Planet not found."));
        let names: Vec<&str> = catalogue.planets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mars"]);
    }

    #[test]
    fn test_add_and_edit_researcher() {
        let script = "4\nVera\nvera@carnegie.edu\n5\n1\nVera Rubin\nrubin@carnegie.edu\n7\n";
        let (catalogue, out) = run(Catalogue::default(), Role::Admin, script);

        assert!(out.contains("Researcher added successfully!"));
        assert!(out.contains("ID: 1\n"));
        assert!(out.contains("Edit researcher name (current: Vera): "));
        assert!(out.contains("Researcher updated successfully!"));

        let researcher = catalogue.researchers().iter().next().unwrap();
        assert_eq!(researcher.name, "Vera Rubin");
        assert_eq!(researcher.email, "rubin@carnegie.edu");
        assert_eq!(researcher.contributions, 0);
    }

    #[test]
    fn test_edit_missing_researcher() {
        let (_, out) = run(Catalogue::default(), Role::Admin, "5\n3\n7\n");
        assert!(out.contains("Researcher not found."));
    }

    #[test]
    fn test_add_researcher_when_full() {
        let config = CatalogueConfig {
            max_researchers: 1,
            ..CatalogueConfig::default()
        };
        let script = "4\nAda\nada@lab\n4\n7\n";
        let (catalogue, out) = run(Catalogue::new(&config), Role::Admin, script);

        assert!(out.contains("Researcher list is full!"));
        assert_eq!(catalogue.researchers().len(), 1);
    }

    #[test]
    fn test_researcher_menu_search_and_contributions() {
        let mut catalogue = Catalogue::default();
        catalogue.researchers_mut().add("Ada", "ada@lab").unwrap();
        catalogue.researchers_mut().add("Grace", "grace@navy.mil").unwrap();
        let script = format!("1\n{ADD_MARS}7\n2\n2\n1\nMars\n1\nPluto\n2\n3\n3\n");

        let (_, out) = run(catalogue, Role::Any, &script);

        assert!(out.contains("\nPlanet Details:\nName: Mars\nType: Terrestrial\nSize: 0.53\n"));
        assert!(out.contains("Distance from Star: 1.52 AU"));
        assert!(out.contains("Orbital Period: 1.88 years"));
        assert!(out.contains("Discovered: Yes\nObserved: No"));
        assert!(out.contains("Planet not found."));
        assert!(out.contains("Total contributions by this researcher: 0"));
        assert!(!out.contains("Researcher not found."));
        assert!(out.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_researcher_login_unknown_id() {
        let mut catalogue = Catalogue::default();
        catalogue.researchers_mut().add("Ada", "ada@lab").unwrap();
        let script = format!("1\n{ADD_MARS}7\n2\n9\n1\nMars\n2\n3\n3\n");

        let (_, out) = run(catalogue, Role::Any, &script);

        assert!(out.contains("Enter your researcher ID: "));
        assert_eq!(out.matches("Researcher not found.").count(), 2);
        assert!(out.contains("Name: Mars"));
        assert!(!out.contains("Total contributions"));
    }

    #[test]
    fn test_researcher_menu_without_researchers() {
        let mut catalogue = Catalogue::default();
        catalogue
            .planets_mut()
            .add(Planet {
                name: "Earth".to_string(),
                kind: "Terrestrial".to_string(),
                size: 1.0,
                distance_from_star: 1.0,
                orbital_period: 1.0,
                description: "Home".to_string(),
                discovered: true,
                observed: true,
            })
            .unwrap();

        let (_, out) = run(catalogue, Role::Researcher, "1\nEarth\n3\n");

        assert!(!out.contains("Enter your researcher ID: "));
        assert!(out.contains("Researcher Menu:"));
        assert!(out.contains("Name: Earth"));
    }

    #[test]
    fn test_researcher_role_exits_after_menu() {
        let mut catalogue = Catalogue::default();
        catalogue.researchers_mut().add("Ada", "ada@lab").unwrap();

        let (_, out) = run(catalogue, Role::Researcher, "1\n3\n1\n");
        assert_eq!(out.matches("Researcher Menu:").count(), 1);
        assert!(!out.contains("Welcome"));
    }

    #[test]
    fn test_catalogue_accessor() {
        let session = session_with(Catalogue::default(), "");
        assert!(session.catalogue().planets().is_empty());
    }
}
