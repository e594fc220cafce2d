// SPDX-License-Identifier: PMPL-1.0-or-later

//! The dvdisaster online documentation table of contents (all languages).
//!
//! Some nodes have no Russian label yet; the renderer's label policy decides
//! whether they fall back or disappear in the Russian pages.

use super::builder::TocBuilder;
use super::tree::Toc;
use crate::error::ContentResult;
use crate::i18n::Lang::{De, En, Ru};

pub fn dvdisaster_toc() -> ContentResult<Toc> {
    let mut toc = TocBuilder::new();

    // News

    toc.section("news")?
        .labels(&[(De, "Neuigkeiten"), (En, "News"), (Ru, "Новости")])?;

    // Overview

    toc.section("index")?
        .labels(&[(De, "Überblick"), (En, "Overview"), (Ru, "Обзор")])?;

    toc.subsection("index10")?.labels(&[
        (De, "Beispiele für die Fehlerkorrektur"),
        (En, "Examples of the error correction"),
        (Ru, "Примеры исправления ошибок"),
    ])?;

    toc.subsection("index20")?.labels(&[
        (De, "dvdisaster ergänzt Qualitäts-Analysen"),
        (En, "dvdisaster complements quality scans"),
        (Ru, "dvdisaster дополняет проверки качества"),
    ])?;

    toc.subsection("index30")?.labels(&[
        (De, "Vor- und  Nachteile von dvdisaster"),
        (En, "Pro and con of dvdisaster"),
        (Ru, "dvdisaster: за и против"),
    ])?;

    // Howtos

    toc.section("howtos")?
        .labels(&[(De, "typische Anwendungen"), (En, "Howtos"), (Ru, "Howto's")])?;

    toc.subsection("howtos60")?.labels(&[
        (De, "Das große Bild"),
        (En, "The big picture"),
        (Ru, "The big picture"),
    ])?;

    toc.subsubsection("howtos61")?.labels(&[
        (De, "richtige Anwendung"),
        (En, "correct usage"),
        (Ru, "correct usage"),
    ])?;

    toc.subsubsection("howtos62")?.labels(&[
        (De, "falsche Anwendung"),
        (En, "incorrect usage"),
        (Ru, "incorrect usage"),
    ])?;

    toc.subsection("howtos10")?.labels(&[
        (De, "Datenträger auf Lesefehler prüfen"),
        (En, "Scanning media for errors"),
        (Ru, "Поиск ошибок на носителе"),
    ])?;

    toc.subsubsection("howtos11")?.labels(&[
        (De, "Grundeinstellungen"),
        (En, "Basic settings"),
        (Ru, "Basic settings"),
    ])?;

    toc.subsubsection("howtos12")?.labels(&[
        (De, "Prüfung durchführen"),
        (En, "Performing the test"),
        (Ru, "foo"),
    ])?;

    toc.subsubsection("howtos13")?.labels(&[
        (De, "Ergebnisse bewerten"),
        (En, "Interpreting the results"),
        (Ru, "foo"),
    ])?;

    toc.subsubsection("howtos14")?.labels(&[
        (De, "Fortgeschrittene Einstellungen"),
        (En, "Advanced settings"),
        (Ru, "Advanced settings"),
    ])?;

    toc.subsection("howtos20")?.labels(&[
        (De, "Fehlerkorrektur-Daten erzeugen"),
        (En, "Creating error correction data"),
        (Ru, "Создание данных для исправления ошибок"),
    ])?;

    toc.subsubsection("howtos21")?.labels(&[
        (De, "als Datei"),
        (En, "as a file"),
        (Ru, "в виде файла"),
    ])?;

    toc.subsubsection("howtos22")?.labels(&[
        (De, "im Abbild"),
        (En, "within the image"),
        (Ru, "внутри образа"),
    ])?;

    toc.subsection("howtos30")?.labels(&[
        (De, "Beschädigten Datenträger einlesen"),
        (En, "Reading defective media"),
        (Ru, "Чтение поврежденных носителей"),
    ])?;

    toc.subsection("howtos40")?.labels(&[
        (De, "Datenträger-Abbild rekonstruieren"),
        (En, "Recovering media images"),
        (Ru, "Восстановление образов носителей"),
    ])?;

    toc.subsection("howtos50")?.labels(&[
        (De, "Informationen über Abbild und Fehlerkorrektur-Daten anzeigen"),
        (En, "Getting information about images and error correction data"),
        (Ru, "Получение информации об образах и данных для исправления ошибок"),
    ])?;

    toc.subsection("howtos90")?.labels(&[
        (De, "Abbild-Kompatibilität überprüfen"),
        (En, "Testing image compatibility"),
    ])?;

    toc.subsubsection("howtos91")?.labels(&[
        (De, "Erzeugen eines Referenz-Abbildes"),
        (En, "Creating the reference image"),
    ])?;

    toc.subsubsection("howtos92")?.labels(&[
        (De, "Erzeugen der zugehörigen Fehlerkorrektur-Daten"),
        (En, "Creating the error correction file"),
    ])?;

    toc.subsubsection("howtos93")?.labels(&[
        (De, "Referenz-Abbild auf einen Datenträger schreiben"),
        (En, "Writing the image to the medium."),
    ])?;

    toc.subsection("howtosa0")?
        .labels(&[(De, "Bedienelemente"), (En, "Dialogs and buttons")])?;

    toc.subsubsection("howtosa1")?
        .labels(&[(De, "Laufwerk auswählen"), (En, "drive selection")])?;

    toc.subsubsection("howtosa2")?
        .labels(&[(De, "Abbild-Datei auswählen"), (En, "Image file selection")])?;

    toc.subsubsection("howtosa3")?.labels(&[
        (De, "Fehlerkorrektur-Datei auswählen"),
        (En, "Protection file selection"),
    ])?;

    toc.subsubsection("howtosa4")?
        .labels(&[(De, "Aktionen beginnen"), (En, "Starting actions")])?;

    // Download

    toc.section("download")?
        .labels(&[(De, "Herunterladen"), (En, "Download"), (Ru, "Скачать")])?;

    toc.subsection("download10")?.labels(&[
        (De, "Systemvoraussetzungen"),
        (En, "System requirements"),
        (Ru, "Системные требования"),
    ])?;

    toc.subsection("download20")?.labels(&[
        (De, "Digitale Unterschrift"),
        (En, "Digital signature"),
        (Ru, "Цифровая подпись"),
    ])?;

    toc.subsection("download30")?
        .labels(&[(De, "Installation"), (En, "Installation"), (Ru, "Установка")])?;

    toc.subsection("download40")?.labels(&[
        (De, "Alpha-/Entwicklerversionen"),
        (En, "Alpha (unstable) versions"),
        (Ru, "Альфа (нестабильные) версии"),
    ])?;

    // Questions and Answers

    toc.section("qa")?.labels(&[
        (De, "Fragen und Antworten"),
        (En, "Questions and Answers"),
        (Ru, "Вопросы и ответы"),
    ])?;

    toc.subsection("qa10")?.labels(&[
        (De, "Technische Fragen"),
        (En, "Technical Questions"),
        (Ru, "Технические вопросы"),
    ])?;

    toc.subsection("qa20")?.labels(&[
        (De, "Fehlermeldungen"),
        (En, "Error messages"),
        (Ru, "Сообщения об ошибках"),
    ])?;

    // Feedback

    toc.section("feedback")?.labels(&[
        (De, "Fehler berichten"),
        (En, "Bug reporting"),
        (Ru, "Сообщения об ошибках"),
    ])?;

    // Imprint

    toc.section("imprint")?
        .labels(&[(De, "Impressum"), (En, "Imprint"), (Ru, "Выходные данные")])?;

    // Privacy notice

    toc.section("privacy")?.labels(&[
        (De, "Datenschutzhinweis"),
        (En, "Privacy policy"),
        (Ru, "Privacy policy"),
    ])?;

    toc.finish()
}
