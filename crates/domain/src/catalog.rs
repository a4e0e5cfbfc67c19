//! Static exercise reference catalog.
//!
//! Read-only metadata for every exercise the client knows about: muscle-group
//! category, MET value for the calorie estimate, a short description and the
//! execution steps shown in the exercise preview.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::ExerciseType;

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: &'static str,
    pub exercise_type: ExerciseType,
    pub category: Category,
    pub met: f64,
    pub description: &'static str,
    pub steps: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Quads,
    PosteriorChain,
    Push,
    Pull,
    Core,
    Conditioning,
}

impl Category {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Quads => "Cuádriceps",
            Category::PosteriorChain => "Isquios y Glúteo",
            Category::Push => "Empuje (Push)",
            Category::Pull => "Tracción (Pull)",
            Category::Core => "Core y Blindaje",
            Category::Conditioning => "Carga y Cardio",
        }
    }
}

/// All catalog entries, in presentation order (grouped by muscle region).
pub static ENTRIES: &[Entry] = &[
    Entry {
        name: "Sentadilla Hack",
        exercise_type: ExerciseType::Strength,
        category: Category::Quads,
        met: 7.5,
        description: "Ejercicio principal de empuje. Marca actual: 168-188 kg.",
        steps: &[
            "Coloca los hombros bajo las almohadillas.",
            "Pies a media altura en la plataforma.",
            "Desciende hasta que tus muslos rompan la paralela.",
            "Empuja explosivamente.",
        ],
    },
    Entry {
        name: "Prensa de Piernas Inclinada",
        exercise_type: ExerciseType::Strength,
        category: Category::Quads,
        met: 6.0,
        description: "Enfoque en volumen y densidad muscular.",
        steps: &[
            "Pies a anchura de caderas.",
            "Baja el peso controladamente.",
            "Evita el bloqueo total de rodillas.",
        ],
    },
    Entry {
        name: "Sentadilla Búlgara",
        exercise_type: ExerciseType::Strength,
        category: Category::Quads,
        met: 7.0,
        description: "Clave para estabilidad unilateral y glúteo.",
        steps: &[
            "Un pie elevado en banco tras de ti.",
            "Mantén el torso ligeramente inclinado.",
            "Baja verticalmente.",
        ],
    },
    Entry {
        name: "Extensiones de Cuádriceps",
        exercise_type: ExerciseType::Strength,
        category: Category::Quads,
        met: 3.5,
        description: "Aislamiento puro para la parte anterior del muslo.",
        steps: &[
            "Ajusta el rodillo sobre los tobillos.",
            "Extiende las piernas por completo.",
            "Sujeta las asas para evitar que la cadera se levante.",
        ],
    },
    Entry {
        name: "Zancadas (Walking Lunges)",
        exercise_type: ExerciseType::Strength,
        category: Category::Quads,
        met: 6.5,
        description: "Transferencia directa al rucking. Usar sacos o chaleco.",
        steps: &[
            "Paso largo hacia adelante.",
            "La rodilla trasera casi toca el suelo.",
            "Mantén el core estable ante el peso.",
        ],
    },
    Entry {
        name: "Curl Femoral Sentado/Tumbado",
        exercise_type: ExerciseType::Strength,
        category: Category::PosteriorChain,
        met: 4.0,
        description: "Punto fuerte. Marca actual: 50 kg.",
        steps: &[
            "Ajusta la máquina para que el eje coincida con la rodilla.",
            "Contracción máxima en el punto más bajo.",
        ],
    },
    Entry {
        name: "Hiperextensiones",
        exercise_type: ExerciseType::Strength,
        category: Category::PosteriorChain,
        met: 3.5,
        description: "Variante segura para lumbar con carga en pecho.",
        steps: &[
            "Ajusta el soporte bajo la cadera.",
            "Baja el torso con espalda neutra.",
            "Sube usando glúteos e isquios.",
        ],
    },
    Entry {
        name: "Cable Pull-throughs",
        exercise_type: ExerciseType::Strength,
        category: Category::PosteriorChain,
        met: 4.0,
        description: "Bisagra de cadera segura en polea baja.",
        steps: &[
            "De espaldas a la polea.",
            "Lleva el peso entre las piernas.",
            "Extiende la cadera con fuerza.",
        ],
    },
    Entry {
        name: "Peso Muerto Rumano (RDL)",
        exercise_type: ExerciseType::Strength,
        category: Category::PosteriorChain,
        met: 7.0,
        description: "Solo incluir si no hay fatiga lumbar.",
        steps: &[
            "Baja la barra pegada a las piernas.",
            "Siente el estiramiento en los isquios.",
            "No bajes más allá de la flexibilidad de tu cadera.",
        ],
    },
    Entry {
        name: "Elevación de Gemelos de pie",
        exercise_type: ExerciseType::Strength,
        category: Category::PosteriorChain,
        met: 3.0,
        description: "Ejercicio crítico. Marca actual: 220 kg.",
        steps: &[
            "Máxima extensión del tobillo.",
            "Pausa un segundo en el estiramiento.",
            "Contracción explosiva.",
        ],
    },
    Entry {
        name: "Press Militar en Máquina",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 5.5,
        description: "Marca actual: 50 kg.",
        steps: &[
            "Espalda bien apoyada.",
            "Codos ligeramente hacia adelante.",
            "Extiende sobre la cabeza.",
        ],
    },
    Entry {
        name: "Arnold Press",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 5.5,
        description: "Para hombro 3D y estabilidad de la articulación.",
        steps: &[
            "Palmas hacia ti al inicio.",
            "Rota las mancuernas mientras subes.",
            "Palmas hacia afuera al final.",
        ],
    },
    Entry {
        name: "Press Convergente de Pecho",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 5.0,
        description: "Fuerza horizontal máxima.",
        steps: &[
            "Ajusta el asiento para que el agarre esté a la altura del pezón.",
            "Empuja hacia el centro.",
        ],
    },
    Entry {
        name: "Aperturas en Polea",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 3.5,
        description: "Aislamiento pectoral con tensión constante.",
        steps: &[
            "Cables a altura media o alta.",
            "Abraza un barril imaginario.",
            "Contrae el pecho en el centro.",
        ],
    },
    Entry {
        name: "Flexiones Tácticas (Push-ups)",
        exercise_type: ExerciseType::Bodyweight,
        category: Category::Push,
        met: 8.0,
        description: "Resistencia con peso corporal.",
        steps: &[
            "Manos bajo los hombros.",
            "Cuerpo como una tabla.",
            "Codos pegados a 45 grados.",
        ],
    },
    Entry {
        name: "Extensión de Tríceps en Polea (Cuerda)",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 3.0,
        description: "Aislamiento del tríceps.",
        steps: &[
            "Separa la cuerda al final del movimiento.",
            "No muevas los codos del sitio.",
        ],
    },
    Entry {
        name: "Dominadas Asistidas",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 8.0,
        description: "Enfoque en progresión de fuerza vertical.",
        steps: &[
            "Agarre ancho.",
            "Pecho hacia la barra.",
            "Controla el descenso.",
        ],
    },
    Entry {
        name: "Jalón al Pecho",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 4.5,
        description: "Marca actual: 75 kg.",
        steps: &[
            "Lleva la barra a la parte superior del pecho.",
            "Retrae las escápulas.",
        ],
    },
    Entry {
        name: "Remo en Polea Baja",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 4.5,
        description: "Densidad total de la espalda.",
        steps: &[
            "Rodillas ligeramente flexionadas.",
            "Tira hacia el ombligo.",
            "No balancees el torso.",
        ],
    },
    Entry {
        name: "Remo al Mentón (Sacos)",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 5.0,
        description: "Trapecio y hombro lateral con material táctico.",
        steps: &[
            "Agarra el saco/mancuerna.",
            "Tira de los codos hacia el techo.",
            "Mantén el peso cerca del cuerpo.",
        ],
    },
    Entry {
        name: "Curl Martillo con Mancuernas",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 3.0,
        description: "Braquial y agarre. Marca actual: 20 kg.",
        steps: &[
            "Palmas enfrentadas.",
            "No gires las muñecas.",
            "Controla la bajada.",
        ],
    },
    Entry {
        name: "Face Pulls",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 3.0,
        description: "Salud del hombro y deltoide posterior.",
        steps: &[
            "Polea a la altura de la cara.",
            "Tira de la cuerda hacia la frente.",
            "Separa las manos al final.",
        ],
    },
    Entry {
        name: "Pájaros (Bent-over Lateral Raise)",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 3.0,
        description: "Aislamiento de deltoide posterior.",
        steps: &[
            "Inclina el torso 90 grados.",
            "Lanza las manos hacia los lados.",
            "Pequeña pausa arriba.",
        ],
    },
    Entry {
        name: "Hanging Leg Raises",
        exercise_type: ExerciseType::Bodyweight,
        category: Category::Core,
        met: 4.0,
        description: "Elevación de piernas colgado para core inferior.",
        steps: &[
            "Cuélgate de la barra.",
            "Sube las piernas estiradas o rodillas al pecho.",
            "Evita el balanceo.",
        ],
    },
    Entry {
        name: "Crunches en Polea Alta",
        exercise_type: ExerciseType::Strength,
        category: Category::Core,
        met: 3.0,
        description: "Abdominales con carga pesada.",
        steps: &[
            "De rodillas frente a la polea.",
            "Encógete llevando los codos a los muslos.",
            "Fuerza abdominal pura.",
        ],
    },
    Entry {
        name: "Plancha con Saco (Weighted Plank)",
        exercise_type: ExerciseType::Bodyweight,
        category: Category::Core,
        met: 3.5,
        description: "Estabilidad específica para rucking.",
        steps: &[
            "Peso sobre la zona lumbar/dorsal.",
            "Mantén la línea recta.",
            "Respira profundamente bajo tensión.",
        ],
    },
    Entry {
        name: "Deadbug",
        exercise_type: ExerciseType::Bodyweight,
        category: Category::Core,
        met: 2.0,
        description: "Control motor y salud lumbar.",
        steps: &[
            "Boca arriba, brazos y piernas arriba.",
            "Baja brazo y pierna contraria lentamente.",
            "Pega la lumbar al suelo.",
        ],
    },
    Entry {
        name: "Paseo del Granjero (Farmer's Walk)",
        exercise_type: ExerciseType::Strength,
        category: Category::Conditioning,
        met: 6.5,
        description: "Brute force agarre y estabilidad sistémica.",
        steps: &[
            "Pesos pesados en cada mano.",
            "Pasos cortos y rápidos.",
            "Torso erguido.",
        ],
    },
    Entry {
        name: "Rucking",
        exercise_type: ExerciseType::Cardio,
        category: Category::Conditioning,
        met: 8.5,
        description: "Disciplina principal: 10 kg chaleco / 5.5 km/h.",
        steps: &[
            "Carga bien distribuida.",
            "Ritmo constante.",
            "Calzado adecuado.",
        ],
    },
    Entry {
        name: "Caminata LISS (Inclinación)",
        exercise_type: ExerciseType::Cardio,
        category: Category::Conditioning,
        met: 5.0,
        description: "Recuperación activa sin carga articular.",
        steps: &[
            "Inclinación de 5-10%.",
            "Paso moderado.",
            "Sin sujetarse a la máquina.",
        ],
    },
    Entry {
        name: "Curl con Barra (Barbell Curl)",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 4.0,
        description: "Constructor de masa clásico.",
        steps: &[
            "Codos pegados al cuerpo.",
            "Sin balanceo de espalda.",
            "Aprieta arriba.",
        ],
    },
    Entry {
        name: "Curl Predicador (Scott Curl)",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 3.5,
        description: "Aislamiento total del pico del bíceps.",
        steps: &[
            "Axilas pegadas al banco.",
            "Extensión completa del brazo.",
            "No levantes el culo del asiento.",
        ],
    },
    Entry {
        name: "Curl Inclinado con Mancuernas",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 3.5,
        description: "Énfasis en la cabeza larga (estiramiento).",
        steps: &[
            "Banco a 45-60 grados.",
            "Brazos colgando detrás del cuerpo.",
            "Mantén los codos atrás al subir.",
        ],
    },
    Entry {
        name: "Curl Araña (Spider Curl)",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 3.5,
        description: "Énfasis en la cabeza corta (contracción).",
        steps: &[
            "Pecho apoyado en banco inclinado.",
            "Brazos colgando verticales.",
            "Sube sin mover los hombros.",
        ],
    },
    Entry {
        name: "Paseo de Dedos (Finger Rolls)",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 3.0,
        description: "Fuerza de agarre extrema.",
        steps: &[
            "Barra pesada en las manos.",
            "Deja rodar la barra hasta las puntas de los dedos.",
            "Cierra la mano explosivamente.",
        ],
    },
    Entry {
        name: "Press Francés (Skullcrushers)",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 4.0,
        description: "Cabeza larga y media del tríceps.",
        steps: &[
            "Barra Z.",
            "Baja detrás de la cabeza para más estiramiento.",
            "Codos cerrados.",
        ],
    },
    Entry {
        name: "Fondos en Paralelas (Dips)",
        exercise_type: ExerciseType::Bodyweight,
        category: Category::Push,
        met: 5.0,
        description: "El rey de los ejercicios de empuje bg.",
        steps: &[
            "Inclínate adelante para pecho, vertical para tríceps.",
            "Baja hasta 90 grados.",
            "No encojas los hombros.",
        ],
    },
    Entry {
        name: "Patada de Tríceps en Polea",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 3.0,
        description: "Contracción pico final.",
        steps: &[
            "Sin mover el hombro.",
            "Extiende el brazo hacia atrás.",
            "Aguanta 1 segundo.",
        ],
    },
    Entry {
        name: "Press de Banca Agarre Cerrado",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 5.0,
        description: "Potencia de tríceps y pecho interior.",
        steps: &[
            "Manos a la anchura de los hombros.",
            "Codos pegados al cuerpo al bajar.",
            "Empuja traccionando la barra.",
        ],
    },
    Entry {
        name: "Elevaciones Laterales (Mancuernas)",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 3.5,
        description: "Anchura visual (Cabeza lateral).",
        steps: &[
            "Codos ligeramente flexionados.",
            "Sube hasta la altura del hombro.",
            "Meñique más alto que el pulgar.",
        ],
    },
    Entry {
        name: "Elevaciones Laterales en Polea (Y-Raise)",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 3.5,
        description: "Tensión continua en todo el rango.",
        steps: &[
            "Cruza los cables por detrás o delante.",
            "Sube en diagonal.",
            "Controla la negativa.",
        ],
    },
    Entry {
        name: "Press Arnold con Kettlebell",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 5.5,
        description: "Estabilidad y fuerza funcional.",
        steps: &[
            "Kettlemell invertida (bottom-up) para mayor reto.",
            "Rota y prensa.",
        ],
    },
    Entry {
        name: "Press de Banca Inclinado con Mancuernas",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 5.0,
        description: "Desarrollo del pectoral superior (clavicular).",
        steps: &[
            "Banco a 30 grados.",
            "Baja profundo para estirar.",
            "Junta las mancuernas arriba sin tocarlas.",
        ],
    },
    Entry {
        name: "Cruces de Polea Alta a Baja",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 3.5,
        description: "Pectoral inferior y corte.",
        steps: &[
            "Tira hacia abajo y al centro.",
            "Cruza las manos al final.",
            "Mantén el pecho alto.",
        ],
    },
    Entry {
        name: "Landmine Press",
        exercise_type: ExerciseType::Strength,
        category: Category::Push,
        met: 5.0,
        description: "Pecho superior y hombro, muy seguro.",
        steps: &[
            "Barra anclada en una esquina.",
            "Empuja con una o dos manos.",
            "Inclínate ligeramente hacia adelante.",
        ],
    },
    Entry {
        name: "Remo T-Bar (Con apoyo)",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 5.0,
        description: "Grosor de espalda media y alta.",
        steps: &[
            "Pecho apoyado.",
            "Agarre neutro o prono.",
            "Junta las escápulas fuerte.",
        ],
    },
    Entry {
        name: "Pull-over en Polea Alta",
        exercise_type: ExerciseType::Strength,
        category: Category::Pull,
        met: 3.5,
        description: "Aislamiento de dorsal ancho (lats).",
        steps: &[
            "Brazos casi rectos.",
            "Lleva la barra a la cadera.",
            "Siente el estiramiento arriba.",
        ],
    },
    Entry {
        name: "Dominadas Neutras",
        exercise_type: ExerciseType::Bodyweight,
        category: Category::Pull,
        met: 8.0,
        description: "Mejor ventaja mecánica para fuerza.",
        steps: &[
            "Palmas enfrentadas.",
            "Pecho a la barra.",
            "Rango completo.",
        ],
    },
    Entry {
        name: "Aductores en Máquina",
        exercise_type: ExerciseType::Strength,
        category: Category::PosteriorChain,
        met: 3.5,
        description: "Estabilidad de cadera y tamaño de pierna.",
        steps: &[
            "Cierra con fuerza.",
            "Controla la apertura.",
            "No rebotes.",
        ],
    },
    Entry {
        name: "Sentadilla Goblet",
        exercise_type: ExerciseType::Strength,
        category: Category::Quads,
        met: 6.0,
        description: "Movilidad y calentamiento pesado.",
        steps: &[
            "Mancuerna al pecho.",
            "Codos por dentro de rodillas.",
            "Torso muy vertical.",
        ],
    },
    Entry {
        name: "Pallof Press",
        exercise_type: ExerciseType::Strength,
        category: Category::Core,
        met: 3.0,
        description: "Anti-rotación fundamental.",
        steps: &[
            "Polea a altura del pecho.",
            "Alejate lateralmente.",
            "Estira los brazos al frente sin girar.",
        ],
    },
    Entry {
        name: "Levantamiento Turco (TGU)",
        exercise_type: ExerciseType::Strength,
        category: Category::Core,
        met: 6.0,
        description: "Estabilidad total del cuerpo.",
        steps: &[
            "Mano siempre mirando la pesa.",
            "Movimientos segmentados.",
            "Control absoluto.",
        ],
    },
    Entry {
        name: "Rueda Abdominal (Ab Wheel)",
        exercise_type: ExerciseType::Bodyweight,
        category: Category::Core,
        met: 5.0,
        description: "Extensión anti-lumbar extrema.",
        steps: &[
            "No dejes caer la cadera.",
            "Empuja desde el dorsal.",
            "Rango que puedas controlar.",
        ],
    },
];

static INDEX: LazyLock<BTreeMap<&'static str, &'static Entry>> =
    LazyLock::new(|| ENTRIES.iter().map(|e| (e.name, e)).collect());

/// Looks up a catalog entry by exact name.
#[must_use]
pub fn entry(name: &str) -> Option<&'static Entry> {
    INDEX.get(name).copied()
}

/// Entries whose name contains `search` (case-insensitive), optionally
/// restricted to one category, in catalog order.
#[must_use]
pub fn matching(search: &str, category: Option<Category>) -> Vec<&'static Entry> {
    let search = search.to_lowercase();
    ENTRIES
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .filter(|e| e.name.to_lowercase().contains(&search))
        .collect()
}
