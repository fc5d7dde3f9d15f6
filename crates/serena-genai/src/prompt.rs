//! Prompt construction for report generation.
//!
//! A prompt is the topic's persona, a fixed four-section report layout
//! addressed to the user, one `- label: value` line per answer, and a
//! closing style directive. Building one is pure and deterministic.

use serena_core::models::form::{ActivityForm, DietForm, FormData, MentalHealthForm, SleepForm};
use serena_core::models::request::ReportRequest;

const MENTAL_HEALTH_PERSONA: &str = "\
Você é um especialista em saúde mental e bem-estar emocional. \
Sua tarefa é analisar as informações sobre estresse e saúde mental fornecidas pelo usuário \
e gerar um relatório personalizado com recomendações práticas e motivacionais.";

const SLEEP_PERSONA: &str = "\
Você é um especialista em sono e higiene do sono. \
Sua tarefa é analisar os hábitos de sono de um usuário \
e gerar um relatório personalizado com recomendações para melhorar a qualidade do descanso.";

const DIET_PERSONA: &str = "\
Você é um nutricionista e especialista em alimentação saudável. \
Sua tarefa é analisar os hábitos alimentares de um usuário \
e gerar um relatório personalizado com recomendações práticas para uma dieta mais equilibrada.";

const ACTIVITY_PERSONA: &str = "\
Você é um educador físico e especialista em saúde corporal. \
Sua tarefa é analisar o nível de atividade física de um usuário \
e gerar um relatório personalizado com recomendações para uma rotina mais ativa e saudável.";

const STYLE_DIRECTIVE: &str = "\
Seja gentil, preciso e use uma linguagem positiva e acessível. Evite jargões médicos complexos.";

/// A rendered answer line.
enum Answer<'a> {
    Plain(&'a str),
    Quoted(&'a str),
    Number(u8),
}

/// Build the generation prompt for a submitted questionnaire.
pub fn build_prompt(request: &ReportRequest) -> String {
    let name = request.user_name();
    let (persona, answers) = match request.form() {
        FormData::MentalHealth(f) => (MENTAL_HEALTH_PERSONA, mental_health_answers(name, f)),
        FormData::Sleep(f) => (SLEEP_PERSONA, sleep_answers(name, f)),
        FormData::Diet(f) => (DIET_PERSONA, diet_answers(name, f)),
        FormData::Activity(f) => (ACTIVITY_PERSONA, activity_answers(name, f)),
    };

    let mut prompt = String::from(persona);
    prompt.push_str("\n\n");
    prompt.push_str(&report_structure(name, request.topic().report_title()));
    prompt.push_str("\n\nAqui estão os dados do usuário:\n");
    for (label, answer) in answers {
        let line = match answer {
            Answer::Plain(v) => format!("- {label}: {v}\n"),
            Answer::Quoted(v) => format!("- {label}: \"{v}\"\n"),
            Answer::Number(v) => format!("- {label}: {v}\n"),
        };
        prompt.push_str(&line);
    }
    prompt.push('\n');
    prompt.push_str(STYLE_DIRECTIVE);
    prompt
}

fn report_structure(name: &str, title: &str) -> String {
    format!(
        "Use o formato Markdown para a resposta. O relatório deve ter as seguintes seções:\n\
         1. **Olá, {name}! Um Relatório Sobre Seu Bem-Estar: {title}** Um parágrafo introdutório e amigável.\n\
         2. **Análise Detalhada:** Com base nas respostas, comente sobre os pontos fortes e as áreas que merecem atenção.\n\
         3. **Plano de Ação Personalizado:** Crie uma lista com 3 a 5 passos simples e acionáveis que o usuário pode começar a implementar imediatamente.\n\
         4. **Mensagem Final:** Uma nota final positiva e de encorajamento."
    )
}

fn mental_health_answers<'a>(name: &'a str, f: &'a MentalHealthForm) -> Vec<(&'static str, Answer<'a>)> {
    vec![
        ("Nome", Answer::Plain(name)),
        ("Frequência com que se sente estressado(a) ou ansioso(a)", Answer::Plain(&f.stress_frequency)),
        ("Principal causa de estresse", Answer::Quoted(&f.stress_source)),
        ("Possui momentos de lazer ou descanso", Answer::Plain(&f.leisure_time)),
        ("Pratica técnicas de relaxamento", Answer::Plain(&f.relaxation_techniques)),
        ("Humor geral nos últimos dias (1-5)", Answer::Number(f.mood)),
    ]
}

fn sleep_answers<'a>(name: &'a str, f: &'a SleepForm) -> Vec<(&'static str, Answer<'a>)> {
    vec![
        ("Nome", Answer::Plain(name)),
        ("Horas de sono por noite", Answer::Plain(&f.sleep_hours)),
        ("Dificuldade para dormir ou acordar", Answer::Plain(&f.sleep_difficulty)),
        ("Uso de celular antes de dormir", Answer::Plain(&f.phone_before_bed)),
        ("Acorda se sentindo descansado(a)", Answer::Plain(&f.waking_up_rested)),
        ("Mantém horários regulares de sono", Answer::Plain(&f.regular_schedule)),
    ]
}

fn diet_answers<'a>(name: &'a str, f: &'a DietForm) -> Vec<(&'static str, Answer<'a>)> {
    vec![
        ("Nome", Answer::Plain(name)),
        ("Refeições completas por dia", Answer::Plain(&f.meals_per_day)),
        ("Costuma pular o café da manhã", Answer::Plain(&f.skip_breakfast)),
        ("Frequência de consumo de alimentos ultraprocessados", Answer::Plain(&f.processed_food_frequency)),
        ("Bebe água regularmente", Answer::Plain(&f.water_intake)),
        ("Inclui frutas, legumes e verduras", Answer::Plain(&f.fruit_and_veg)),
        ("Frequência de ingestão de bebidas alcoólicas", Answer::Plain(&f.alcohol_frequency)),
    ]
}

fn activity_answers<'a>(name: &'a str, f: &'a ActivityForm) -> Vec<(&'static str, Answer<'a>)> {
    vec![
        ("Nome", Answer::Plain(name)),
        ("Prática de atividade física (qual e frequência)", Answer::Quoted(&f.physical_activity)),
        ("Minutos de movimento por dia", Answer::Plain(&f.movement_minutes)),
        ("Trabalha ou estuda sentado(a) por longos períodos", Answer::Plain(&f.is_sedentary)),
        ("Sente dores musculares ou posturais com frequência", Answer::Plain(&f.has_muscle_pain)),
    ]
}
