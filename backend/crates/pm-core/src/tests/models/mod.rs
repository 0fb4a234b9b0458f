mod sprint;
