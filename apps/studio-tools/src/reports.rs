//! Story builders for the DroPiPeche client documents.

use report_pdf::{Cell, Color, Flowable, FontRole, StyleSheet, Table, TableStyle, MM};

/// One phase of the delivery plan: title, start week, end week, deliverables.
const PLAN: [(&str, u8, u8, &str); 8] = [
    (
        "Cadrage & specs finales",
        1,
        2,
        "Spécifications validées, choix PSP/KYC, règles métiers figées.",
    ),
    (
        "Backend core",
        3,
        8,
        "Auth, profils, lots, commandes, panier, statuts, notifications, logs.",
    ),
    (
        "Paiement séquestre",
        9,
        12,
        "Intégration PSP, webhooks, états transactionnels, tests cas limites.",
    ),
    (
        "KYC + registres officiels",
        13,
        16,
        "SIRENE/INSEE, registre navires, workflow vérif, scoring.",
    ),
    (
        "GPS / ETA",
        17,
        20,
        "Tracking, historique positions, ETA, états bateau.",
    ),
    (
        "Back-office web",
        21,
        24,
        "Admin, litiges, supervision, exports.",
    ),
    (
        "Durcissement apps mobiles",
        25,
        29,
        "QA, performances, UX final, corrections.",
    ),
    (
        "Pré-prod & release",
        30,
        32,
        "Sécurité, tests E2E, publication stores, monitoring.",
    ),
];

fn week_range(start: u8, end: u8) -> String {
    format!("S{}–S{}", start, end)
}

fn section(story: &mut Vec<Flowable>, styles: &StyleSheet, title: &str) {
    story.push(Flowable::Spacer(6.0));
    story.push(Flowable::paragraph(title, &styles.section));
    story.push(Flowable::Spacer(2.0));
}

fn items(story: &mut Vec<Flowable>, styles: &StyleSheet, lines: &[&str]) {
    for line in lines {
        story.push(Flowable::paragraph(format!("- {}", line), &styles.body));
    }
}

/// The project status report, dated 22/02/2026.
pub fn status_story(styles: &StyleSheet) -> Vec<Flowable> {
    let mut story = vec![
        Flowable::paragraph("DroPiPeche - Statut du projet", &styles.title),
        Flowable::paragraph("Date : 22/02/2026", &styles.subtitle),
        Flowable::Spacer(6.0),
        Flowable::HRule {
            thickness: 1.0,
            color: styles.rule_color,
        },
        Flowable::Spacer(10.0),
    ];

    section(&mut story, styles, "1. Synthese (executif)");
    story.push(Flowable::paragraph(
        "Le prototype fonctionnel est prêt pour démonstration côté acheteur et pêcheur, \
         avec une interface unifiée, des scénarios de test et des flux principaux simulés.",
        &styles.body,
    ));
    story.push(Flowable::paragraph(
        "Le système de vérification 100 % automatique (KYC + registres officiels) est \
         modélisé côté application ; l’intégration backend (Supabase, PSP, registres \
         officiels) reste à brancher pour la mise en production.",
        &styles.body,
    ));

    section(&mut story, styles, "2. Perimetre couvert (demo realiste sans backend)");
    items(
        &mut story,
        styles,
        &[
            "Parcours création de compte avec choix du rôle (Acheteur / Pêcheur).",
            "Statuts KYC visibles (PENDING / VERIFIED / REJECTED) avec scénarios de démonstration.",
            "Pages Acheteur : offres en mer, filtres, panier, réservations, suivi, profil.",
            "Pages Pêcheur : publication des prises, commandes, validation, profil.",
            "Navigation complète, retour sur pages clés, corrections de scroll et zone sûre (Android/iOS).",
            "Design unifié : fond chalutier, logo officiel, palette bleue transparente, typographies renforcées.",
        ],
    );

    section(&mut story, styles, "3. Verification 100 % automatique (France)");
    story.push(Flowable::paragraph(
        "Objectif : zéro validation manuelle. Tous les comptes sont bloqués tant que la \
         vérification n’est pas validée côté backend.",
        &styles.body,
    ));
    items(
        &mut story,
        styles,
        &[
            "Acheteurs : vérification via API officielle SIRENE/INSEE (SIRET actif, APE cohérent).",
            "Pêcheurs : registre officiel des navires + KYC PSP (identité + IBAN).",
            "Blocage automatique des tentatives frauduleuses + journalisation.",
        ],
    );

    section(&mut story, styles, "4. Paiement sequestre et compensation (specification)");
    items(
        &mut story,
        styles,
        &[
            "Paiement en ligne obligatoire, argent bloqué jusqu’à validation de la livraison.",
            "Règles de compensation prévues si retard/annulation (acheteur ou pêcheur).",
            "Interface de litiges préparée pour arbitrage et décisions automatiques/assistées.",
        ],
    );

    section(&mut story, styles, "5. Carte et navigation");
    items(
        &mut story,
        styles,
        &[
            "Ouverture directe Waze si disponible, sinon Google Maps.",
            "ETA et statut des bateaux affichés dans la démo.",
        ],
    );

    section(&mut story, styles, "6. Tests realises");
    items(
        &mut story,
        styles,
        &[
            "Compilation TypeScript sans erreurs.",
            "Tests manuels Android : navigation, scroll, formulaires, scénarios KYC.",
            "APK de démonstration disponible pour tests mobiles.",
        ],
    );

    section(&mut story, styles, "7. Points restants pour production");
    items(
        &mut story,
        styles,
        &[
            "Intégration Supabase (auth, stockage, base de données, sécurité).",
            "Connexion aux API officielles SIRENE/INSEE et registre des navires.",
            "Intégration PSP pour KYC et paiement séquestré.",
            "Traçabilité complète + logs + back office admin avancé.",
        ],
    );

    section(&mut story, styles, "8. Prochaine etape proposee");
    items(
        &mut story,
        styles,
        &[
            "Créer le projet Supabase et établir les schémas de données.",
            "Brancher authentification + stockage de documents KYC.",
            "Connecter les APIs officielles pour vérification automatique.",
        ],
    );

    story
}

/// The planning document, dated 26/02/2026. `logo_png` goes into the header
/// table when the transparent logo file is available.
pub fn planning_story(styles: &StyleSheet, logo_png: Option<Vec<u8>>) -> Vec<Flowable> {
    let logo_cell = match logo_png {
        Some(png) => Cell::image(png, 60.0 * MM, 28.0 * MM),
        None => Cell::empty(),
    };

    let header = Table {
        col_widths: vec![120.0 * MM, 60.0 * MM],
        rows: vec![
            vec![
                Cell::text("DroPiPeche — Planning de réalisation", &styles.title),
                logo_cell,
            ],
            vec![
                Cell::text("KAH-DIGITAL — Keita Namake Kenams", &styles.subtitle),
                Cell::text_right("Date : 26/02/2026", &styles.subtitle),
            ],
        ],
        style: TableStyle {
            cell_padding: 0.0,
            ..TableStyle::default()
        },
    };

    let mut story = vec![
        Flowable::Table(header),
        Flowable::Spacer(6.0),
        Flowable::HRule {
            thickness: 1.0,
            color: styles.rule_color,
        },
        Flowable::Spacer(10.0),
        Flowable::paragraph("Hypothèses", &styles.section),
    ];

    for line in [
        "Rythme: 1 développeur, 8h/jour, 5j/semaine.",
        "APIs tiers (PSP, SIRENE/INSEE, registre navires) disponibles et stables.",
        "Périmètre conforme au devis v1 (MVP).",
    ] {
        story.push(Flowable::bullet(line, &styles.bullet));
    }

    story.push(Flowable::Spacer(6.0));
    story.push(Flowable::paragraph(
        "Planning indicatif (32 semaines)",
        &styles.section,
    ));
    story.push(Flowable::Table(plan_table(styles)));
    story.push(Flowable::Spacer(10.0));
    story.push(Flowable::paragraph("Buffer recommandé", &styles.section));
    for line in [
        "Ajouter 2 semaines de marge pour retours client et aléas fournisseurs.",
        "Toute évolution hors périmètre fera l’objet d’un avenant.",
    ] {
        story.push(Flowable::bullet(line, &styles.bullet));
    }

    story
}

fn plan_table(styles: &StyleSheet) -> Table {
    let mut header_style = styles.body.clone();
    header_style.font = FontRole::Bold;
    header_style.size = 10.0;
    header_style.color = Color::hex("#0B1A2B");

    let mut rows = vec![vec![
        Cell::text("Phase", &header_style),
        Cell::text("Période", &header_style),
        Cell::text("Livrables clés", &header_style),
    ]];
    for (title, start, end, deliverables) in PLAN {
        rows.push(vec![
            Cell::text(title, &styles.body),
            Cell::text(week_range(start, end), &styles.body),
            Cell::text(deliverables, &styles.body),
        ]);
    }

    Table {
        col_widths: vec![62.0 * MM, 45.0 * MM, 75.0 * MM],
        rows,
        style: TableStyle {
            grid: Some((0.5, Color::hex("#D5DBE3"))),
            header_background: Some(Color::hex("#EEF2F7")),
            row_backgrounds: Some((Color::WHITE, Color::hex("#FAFBFD"))),
            cell_padding: 2.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_story_opens_with_title() {
        let story = status_story(&StyleSheet::dropipeche());
        match &story[0] {
            Flowable::Paragraph { text, .. } => {
                assert_eq!(text, "DroPiPeche - Statut du projet");
            }
            _ => panic!("expected a title paragraph"),
        }
        // Eight numbered sections.
        let sections = story
            .iter()
            .filter(|f| matches!(f, Flowable::Paragraph { text, .. }
                if text.chars().next().is_some_and(|c| c.is_ascii_digit()) && text.contains(". ")))
            .count();
        assert_eq!(sections, 8);
    }

    #[test]
    fn test_plan_table_has_header_and_eight_phases() {
        let table = plan_table(&StyleSheet::planning());
        assert_eq!(table.rows.len(), 9);
        assert_eq!(table.col_widths.len(), 3);
    }

    #[test]
    fn test_planning_without_logo_uses_empty_cell() {
        let story = planning_story(&StyleSheet::planning(), None);
        match &story[0] {
            Flowable::Table(table) => {
                assert!(matches!(
                    table.rows[0][1].content,
                    report_pdf::CellContent::Empty
                ));
            }
            _ => panic!("expected the header table first"),
        }
    }

    #[test]
    fn test_week_range_format() {
        assert_eq!(week_range(30, 32), "S30–S32");
    }
}
