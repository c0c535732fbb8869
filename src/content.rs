//! The literal content of the guide.
//!
//! Everything here is fixed at authoring time: the running title, the output
//! file name and the ordered block sequence.  Inline bold uses the `**`
//! markup of [`crate::richtext`].

use crate::model::{Block, StyleName};

/// Title drawn in the running header of every page.
pub const RUNNING_TITLE: &str = "Инструкция: Как узнать свой ID в Telegram";

/// Output file name used when the caller does not override the path.
pub const DEFAULT_OUTPUT_FILE: &str = "telegram_id_instruction.pdf";

/// Prefix of the page number line in the footer.
pub const PAGE_LABEL: &str = "Стр.";

/// Builds the ordered block sequence of the document body.
pub fn guide_blocks() -> Vec<Block> {
    let mut blocks = Vec::new();

    blocks.push(Block::paragraph(
        "Как узнать свой ID в Telegram",
        StyleName::Title,
    ));
    blocks.push(Block::paragraph(
        "Telegram ID — это уникальный числовой идентификатор вашего аккаунта. \
         Он может понадобиться для настройки ботов, интеграций или обращения в \
         техническую поддержку.",
        StyleName::Subtitle,
    ));

    blocks.push(Block::paragraph(
        "Способ 1. Через бота @userinfobot",
        StyleName::Heading,
    ));
    blocks.push(Block::ordered([
        "Откройте Telegram на телефоне или компьютере.",
        "В поиске введите **@userinfobot** и перейдите в чат с ботом.",
        "Нажмите кнопку **Start** (или отправьте команду **/start**).",
        "Бот сразу отправит сообщение с вашим **User ID** — это и есть ваш Telegram ID.",
    ]));
    blocks.push(Block::spacer(2.1));

    blocks.push(Block::paragraph(
        "Способ 2. Откройте таблицу",
        StyleName::Heading,
    ));
    blocks.push(Block::paragraph(
        "Перейдите по предоставленной ссылке, найдите пустую строку (или строку, \
         выделенную для вас) и внесите данные в соответствующие столбцы.",
        StyleName::Body,
    ));
    blocks.push(Block::spacer(1.4));
    blocks.push(Block::paragraph(
        "Важные правила заполнения:",
        StyleName::Body,
    ));
    blocks.push(Block::bulleted([
        "**ФИО** — пишите полностью: Иванов Иван Иванович (без сокращений).",
        "**Telegram ID** — только цифры (например, 582937102). Не вставляйте \
         **@username** или ссылки.",
        "**Должность** — укажите актуальную и официальную.",
    ]));

    blocks.push(Block::paragraph(
        "Как будет работать бот: пошаговый план внедрения",
        StyleName::Heading,
    ));
    blocks.push(Block::paragraph(
        "Для плавного и эффективного запуска подключение сотрудников к боту будет \
         происходить в два последовательных этапа. Такой подход позволяет \
         протестировать функционал, собрать обратную связь и затем масштабировать \
         использование.",
        StyleName::Body,
    ));

    blocks.push(Block::paragraph(
        "Этап 1: Подключение НТО и ЗНТО (тестирование + сбор предложений)",
        StyleName::Body,
    ));
    blocks.push(Block::spacer(1.4));
    blocks.push(Block::paragraph("Цели этапа:", StyleName::Body));
    blocks.push(Block::bulleted([
        "Тестировать основные функции бота.",
        "Фиксировать замечания, пожелания и предложения по улучшению.",
    ]));
    blocks.push(Block::spacer(0.7));
    blocks.push(Block::paragraph(
        "Сроки: с 22.09.2025 по 22.10.2025",
        StyleName::Caption,
    ));

    blocks.push(Block::paragraph("Этап 2: Подключение ЦА", StyleName::Body));
    blocks.push(Block::spacer(1.4));
    blocks.push(Block::paragraph("Условия перехода:", StyleName::Body));
    blocks.push(Block::bulleted([
        "Сотрудники, отобранные руководителями и их заместителями.",
        "Только после успешного завершения Этапа 1.",
    ]));

    blocks.push(Block::spacer(2.1));
    blocks.push(Block::paragraph(
        "Как происходит подключение:",
        StyleName::Body,
    ));
    blocks.push(Block::bulleted([
        "Сотрудник передаёт данные (ФИО, Telegram ID, должность) — например, \
         через таблицу на Яндекс.Диске.",
        "Администратор системы добавляет пользователя в бота.",
    ]));

    blocks.push(Block::spacer(1.4));
    for note in [
        "Переход на Этап 2 возможен только после финального одобрения по итогам \
         тестирования.",
        "Все пользователи получают персонализированный доступ — бот знает ФИО и \
         должность каждого.",
        "Поддержка и инструкции доступны на всех этапах.",
    ] {
        blocks.push(Block::paragraph(note, StyleName::Note));
    }

    blocks.push(Block::spacer(2.8));
    blocks.push(Block::paragraph(
        "Такой подход обеспечит плавный, контролируемый и эффективный запуск без \
         сбоев и перегрузок — с учётом мнений ключевых пользователей и интересов \
         бизнеса.",
        StyleName::Body,
    ));

    blocks
}
