//! Escompte Engine CLI
//!
//! Runs the worked classroom examples through a calculation session and
//! prints the results plus the recorded history.

use escompte_engine::{CalculationKind, CalculationSession, Effect};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Escompte Engine v0.1.0");
    println!("======================\n");

    let mut session = CalculationSession::new();

    // Module 1: commercial discount
    let commercial = session.commercial_discount(5000.0, 6.0, 90);
    println!("Escompte commercial (Cn=5000, i=6%, n=90j)");
    println!("  Escompte:        {:.2}", commercial.discount);
    println!("  Valeur actuelle: {:.2}\n", commercial.present_value);

    // Module 2: rational discount
    let rational = session.rational_discount(3000.0, 4.0, 180);
    println!("Escompte rationnel (Cn=3000, i=4%, n=180j)");
    println!("  Escompte:        {:.2}", rational.discount);
    println!("  Valeur actuelle: {:.2}\n", rational.present_value);

    // Module 3: agios with commission and VAT
    let agios = session.agios(10000.0, 6.0, 90, 0.5, 20.0);
    println!("Agios (Cn=10000, i=6%, n=90j, com=0.5%, TVA=20%)");
    println!("  Agios HT:  {:.2}", agios.agios_ht);
    println!("  Agios TTC: {:.2}", agios.agios_ttc);
    println!("  Net HT:    {:.2}", agios.net_ht);
    println!("  Net TTC:   {:.2}\n", agios.net_ttc);

    // Module 4: annualized rates implied by the agios
    let rates = session.rates(10000.0, 6.0, 90, 0.5)?;
    println!("Taux (Cn=10000, i=6%, n=90j, com=0.5%)");
    println!("  TRE: {:.2}%", rates.tre);
    println!("  TP:  {:.2}%", rates.tp);
    println!("  TR:  {:.2}%\n", rates.tr);

    // Module 5: equivalent date of two effects
    let effects = vec![
        Effect::parse(500.0, "2024-01-01")?,
        Effect::parse(1500.0, "2024-03-01")?,
    ];
    let equivalence = session.equivalent_date(&effects)?;
    println!("Date d'équivalence (500 @ 2024-01-01, 1500 @ 2024-03-01)");
    println!("  Date:         {}", equivalence.equivalent_date);
    println!("  Jours moyens: {}\n", equivalence.weighted_days);

    // Recorded history, newest first within each kind
    println!("Historique ({} entrées)", session.history().total_len());
    for kind in CalculationKind::ALL {
        for record in session.history().records(kind) {
            println!("{}", serde_json::to_string(record)?);
        }
    }

    Ok(())
}
