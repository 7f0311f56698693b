use maud::{Markup, html};

use crate::player::Player;

pub const TITLE: &str = "League Table";

/// Markup of the league table: a fixed `Name | Wins` header and one row per
/// player, in the given order.
pub fn league_table(players: &[Player]) -> Markup {
    html! {
        div {
            h2 { (TITLE) }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Wins" }
                    }
                }
                tbody {
                    @for player in players {
                        tr {
                            td { (player.name) }
                            td { (player.wins) }
                        }
                    }
                }
            }
        }
    }
}
